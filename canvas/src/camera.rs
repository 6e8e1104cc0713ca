//! Camera state and coordinate conversions between screen and canvas space.
//!
//! Screen space is CSS pixels relative to the top-left corner of the canvas
//! host element. Canvas space is the zone's logical layout coordinate system,
//! independent of on-screen pixel scale. The mapping is
//! `screen = canvas * zoom - scroll`, so increasing `scroll_x` moves the
//! content left, matching a scrolled viewport.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Sentinel returned when screen geometry is unavailable.
    pub const INVALID: Self = Self { x: -1.0, y: -1.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether this point carries real coordinates rather than the sentinel
    /// produced before the host element has been laid out. Pointer handlers
    /// skip invalid points instead of acting on them.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

/// Convert viewport client coordinates to element-relative screen coordinates
/// given the element's bounding rectangle.
///
/// Returns [`Point::INVALID`] when the element has no layout yet (a zero-sized
/// rect); callers must check [`Point::is_valid`] and skip such points rather
/// than expect an error.
#[must_use]
pub fn element_point_from_rect(
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
    client_x: f64,
    client_y: f64,
) -> Point {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return Point::INVALID;
    }
    Point::new(client_x - rect_left, client_y - rect_top)
}

/// Camera state for scroll/zoom over a fixed-size zone canvas.
///
/// `scroll_x` / `scroll_y` are in CSS pixels. `zoom` is a scale factor
/// clamped to [`ZOOM_MIN`]..=[`ZOOM_MAX`].
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { scroll_x: 0.0, scroll_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to canvas coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point {
            x: (screen.x + self.scroll_x) / self.zoom,
            y: (screen.y + self.scroll_y) / self.zoom,
        }
    }

    /// Convert a canvas-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point {
            x: canvas.x * self.zoom - self.scroll_x,
            y: canvas.y * self.zoom - self.scroll_y,
        }
    }

    /// Convert a screen-space distance (pixels) to canvas-space distance.
    #[must_use]
    pub fn screen_dist_to_canvas(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Set the zoom factor, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Step the zoom in by one increment.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Step the zoom out by one increment.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Change zoom while keeping the canvas point under `anchor_screen` fixed
    /// on screen, by re-deriving the scroll offset after the zoom change.
    pub fn zoom_at(&mut self, anchor_screen: Point, new_zoom: f64) {
        let anchor_canvas = self.screen_to_canvas(anchor_screen);
        self.set_zoom(new_zoom);
        self.scroll_x = anchor_canvas.x * self.zoom - anchor_screen.x;
        self.scroll_y = anchor_canvas.y * self.zoom - anchor_screen.y;
    }

    /// Scroll by a screen-space pointer delta, so dragged content follows the
    /// pointer.
    pub fn pan_by(&mut self, dx_screen: f64, dy_screen: f64) {
        self.scroll_x -= dx_screen;
        self.scroll_y -= dy_screen;
    }
}
