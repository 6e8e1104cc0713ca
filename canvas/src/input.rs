//! Input model: modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Modifiers` captures the user's intent at the time of a pointer event.
//! `GestureState` is the active gesture tracked between pointer-down and
//! pointer-up, carrying the context needed to compute incremental deltas and
//! emit the final batched mutation on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashSet;

use crate::camera::Point;
use crate::consts::MARQUEE_MIN_COMMIT_SIZE;
use crate::doc::ItemId;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the toggle ("additive selection") modifier is held. Ctrl on
    /// Windows/Linux, Cmd on macOS.
    #[must_use]
    pub fn toggles_selection(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Whether any add-to-selection modifier is held. Shift adds without
    /// toggling; Ctrl/Cmd toggle.
    #[must_use]
    pub fn extends_selection(&self) -> bool {
        self.shift || self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key name as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key is the pan modifier (space bar).
    #[must_use]
    pub fn is_pan_key(&self) -> bool {
        self.0 == " " || self.0 == "Space" || self.0 == "Spacebar"
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Starting position of one item, captured when a move gesture begins.
#[derive(Debug, Clone, Copy)]
pub struct ItemOrigin {
    pub id: ItemId,
    pub x: f64,
    pub y: f64,
}

/// Rubber-band selection rectangle tracked between press and release.
///
/// Exists only for the duration of the gesture; never persisted.
#[derive(Debug, Clone)]
pub struct MarqueeState {
    /// Canvas-space point where the press happened.
    pub origin: Point,
    /// Canvas-space position of the most recent pointer event.
    pub current: Point,
    /// Screen-space press point, for the activation threshold.
    pub press_screen: Point,
    /// Whether an add-to-selection modifier was held at press.
    pub additive: bool,
    /// Whether the pointer has travelled far enough for the marquee to show.
    pub active: bool,
    /// Items whose center currently falls inside the rectangle — the preview
    /// selection, committed only on release.
    pub preview: HashSet<ItemId>,
}

impl MarqueeState {
    /// Arm a marquee at the press point. It stays invisible until the pointer
    /// travels past the activation threshold.
    #[must_use]
    pub fn new(origin: Point, press_screen: Point, additive: bool) -> Self {
        Self {
            origin,
            current: origin,
            press_screen,
            additive,
            active: false,
            preview: HashSet::new(),
        }
    }

    /// Rectangle corners as `(min, max)` canvas points, derived live from the
    /// press origin and the current pointer position.
    #[must_use]
    pub fn rect(&self) -> (Point, Point) {
        (
            Point::new(self.origin.x.min(self.current.x), self.origin.y.min(self.current.y)),
            Point::new(self.origin.x.max(self.current.x), self.origin.y.max(self.current.y)),
        )
    }

    /// Whether a canvas point lies inside the current rectangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let (min, max) = self.rect();
        pt.x >= min.x && pt.x <= max.x && pt.y >= min.y && pt.y <= max.y
    }

    /// Whether the final rectangle is large enough to commit as a selection.
    #[must_use]
    pub fn meets_commit_threshold(&self) -> bool {
        let (min, max) = self.rect();
        (max.x - min.x) >= MARQUEE_MIN_COMMIT_SIZE && (max.y - min.y) >= MARQUEE_MIN_COMMIT_SIZE
    }
}

/// Internal state of the gesture state machine.
///
/// Each active variant carries the gesture context needed to compute deltas
/// and emit final actions on pointer-up.
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is scrolling the viewport by dragging.
    Panning {
        /// Screen-space position of the previous pointer event, used to
        /// compute the pan delta.
        last_screen: Point,
    },
    /// The user is moving the selected items.
    MovingSelection {
        /// Item under the pointer at press; a no-move release collapses the
        /// selection to it.
        pressed: ItemId,
        /// Whether an add-to-selection modifier was held at press.
        additive: bool,
        /// Canvas-space pointer position at press.
        start_canvas: Point,
        /// Starting positions of every selected item, the baseline for
        /// snap-and-clamp deltas and for the final changed-item batch.
        origins: Vec<ItemOrigin>,
    },
    /// The user is drawing (or about to draw) a marquee rectangle.
    Marquee(MarqueeState),
}
