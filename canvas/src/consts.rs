//! Shared numeric constants for the map-editor canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.25;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 3.0;

/// Increment applied by one zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 0.25;

// ── Marquee ─────────────────────────────────────────────────────

/// Screen-space distance in pixels the pointer must travel from the press
/// point before the marquee rectangle becomes visible. Distinguishes an
/// intended rubber-band drag from a click.
pub const MARQUEE_DRAG_THRESHOLD_PX: f64 = 5.0;

/// Minimum marquee width and height, in canvas units, required to commit the
/// previewed selection on release.
pub const MARQUEE_MIN_COMMIT_SIZE: f64 = 5.0;

// ── Layout ──────────────────────────────────────────────────────

/// Margin in canvas units reserved at each canvas edge when distributing a
/// selection along an axis.
pub const DISTRIBUTE_EDGE_MARGIN: f64 = 50.0;

/// Snap-grid size used when a zone reports none.
pub const DEFAULT_SNAP_SIZE: f64 = 10.0;

/// Canvas width used when a zone reports none.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1600.0;

/// Canvas height used when a zone reports none.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1000.0;

/// Background fill used when a zone reports none.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#F5EBDD";

/// Geometry delta below which a position is treated as unchanged when
/// deciding whether an item belongs in a persistence batch.
pub const POSITION_EPSILON: f64 = 0.01;
