//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`editor`, `ui`, `commands`, `notices`) so
//! individual components can depend on small focused models. Everything here
//! is plain data held in `RwSignal`s provided via context; the imperative
//! canvas engine is owned by `CanvasHost` alone and reached only through the
//! command queue.

pub mod commands;
pub mod editor;
pub mod notices;
pub mod ui;
