//! Command queue from the chrome to the canvas engine.
//!
//! ARCHITECTURE
//! ============
//! The imperative engine lives inside `CanvasHost` and cannot be shared
//! through reactive context. Components that need to drive it (toolbar
//! buttons, inspector inputs, status-bar controls) push commands into this
//! queue instead; `CanvasHost` watches the sequence number and drains the
//! queue in order. One producer signal, one consumer, no engine coupling.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use canvas::align::{AlignMode, DistributeAxis};
use canvas::doc::ItemId;

/// A single property edit targeting one item.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemEdit {
    Number(Option<i64>),
    Capacity(u32),
    Rotation(f64),
    FillColor(Option<String>),
}

/// One editor operation requested by the chrome.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    ZoomIn,
    ZoomOut,
    SetSnapSize(f64),
    Align(AlignMode),
    Distribute(DistributeAxis),
    /// Delete the current selection (asks for confirmation first when more
    /// than one item is selected).
    DeleteSelection,
    /// Apply one property edit to one item and persist it.
    EditItem { id: ItemId, edit: ItemEdit },
    DeselectAll,
    SelectAll,
}

/// FIFO command queue. The sequence number makes every push observable
/// through a reactive signal even when an identical command repeats.
#[derive(Clone, Debug, Default)]
pub struct CommandQueue {
    pub seq: u64,
    queue: Vec<EditorCommand>,
}

impl CommandQueue {
    /// Append a command and bump the sequence number.
    pub fn push(&mut self, command: EditorCommand) {
        self.queue.push(command);
        self.seq += 1;
    }

    /// Take every queued command, oldest first.
    pub fn drain(&mut self) -> Vec<EditorCommand> {
        std::mem::take(&mut self.queue)
    }

    /// Number of commands waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
