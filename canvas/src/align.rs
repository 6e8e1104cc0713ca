//! Alignment and distribution of multi-item selections.
//!
//! All functions here are pure: they take the selected items in any order and
//! return the batch of absolute final positions, leaving store mutation and
//! persistence to the engine. Items that would not move are omitted from the
//! result, which makes every mode idempotent — applying it twice produces an
//! empty second batch.

#[cfg(test)]
#[path = "align_test.rs"]
mod align_test;

use crate::consts::{DISTRIBUTE_EDGE_MARGIN, POSITION_EPSILON};
use crate::doc::{MapConfig, MapItem, PositionUpdate};

/// Edge and center alignment rules for a multi-item selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    /// Move every left edge to the leftmost edge in the selection.
    Left,
    /// Move every right edge to the rightmost edge in the selection.
    Right,
    /// Move every top edge to the topmost edge in the selection.
    Top,
    /// Move every bottom edge to the bottommost edge in the selection.
    Bottom,
    /// Center every item horizontally on the mean center x, snapped to grid.
    CenterH,
    /// Center every item vertically on the mean center y, snapped to grid.
    CenterV,
}

/// Axis along which items are spread by distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributeAxis {
    Horizontal,
    Vertical,
}

fn push_if_moved(out: &mut Vec<PositionUpdate>, item: &MapItem, config: &MapConfig, x: f64, y: f64) {
    let clamped_x = config.clamp_x(x, item.width);
    let clamped_y = config.clamp_y(y, item.height);
    if (clamped_x - item.x).abs() > POSITION_EPSILON || (clamped_y - item.y).abs() > POSITION_EPSILON {
        out.push(PositionUpdate {
            id: item.id,
            x: clamped_x,
            y: clamped_y,
            rotation: item.rotation,
        });
    }
}

/// Compute aligned positions for the given items.
///
/// Fewer than two items is a no-op. Edge modes move to an existing edge and
/// keep whatever grid alignment that edge already has; center modes derive a
/// new coordinate (the mean of item centers) and snap it to the grid.
#[must_use]
pub fn align_positions(items: &[&MapItem], mode: AlignMode, config: &MapConfig) -> Vec<PositionUpdate> {
    if items.len() < 2 {
        return Vec::new();
    }
    let count = items.len() as f64;
    let mut out = Vec::new();
    match mode {
        AlignMode::Left => {
            let target = items.iter().map(|i| i.x).fold(f64::INFINITY, f64::min);
            for item in items {
                push_if_moved(&mut out, item, config, target, item.y);
            }
        }
        AlignMode::Right => {
            let target = items.iter().map(|i| i.x + i.width).fold(f64::NEG_INFINITY, f64::max);
            for item in items {
                push_if_moved(&mut out, item, config, target - item.width, item.y);
            }
        }
        AlignMode::Top => {
            let target = items.iter().map(|i| i.y).fold(f64::INFINITY, f64::min);
            for item in items {
                push_if_moved(&mut out, item, config, item.x, target);
            }
        }
        AlignMode::Bottom => {
            let target = items.iter().map(|i| i.y + i.height).fold(f64::NEG_INFINITY, f64::max);
            for item in items {
                push_if_moved(&mut out, item, config, item.x, target - item.height);
            }
        }
        AlignMode::CenterH => {
            let target = config.snap(items.iter().map(|i| i.center().x).sum::<f64>() / count);
            for item in items {
                push_if_moved(&mut out, item, config, target - item.width * 0.5, item.y);
            }
        }
        AlignMode::CenterV => {
            let target = config.snap(items.iter().map(|i| i.center().y).sum::<f64>() / count);
            for item in items {
                push_if_moved(&mut out, item, config, item.x, target - item.height * 0.5);
            }
        }
    }
    out
}

/// Compute evenly distributed positions along `axis`.
///
/// Items keep their current order along the axis. A fixed margin is reserved
/// at each canvas edge and the remaining space between the margins is split
/// into uniform gaps: `gap = (available - total_extent) / (count - 1)`. With
/// exactly two items whose extents fill the margins, the gap degenerates to
/// zero and nothing moves. The perpendicular coordinate of every item centers
/// on the mean perpendicular position, rounded to the nearest integer — not
/// grid-snapped — so the computed gaps stay exact.
#[must_use]
pub fn distribute_positions(
    items: &[&MapItem],
    axis: DistributeAxis,
    config: &MapConfig,
) -> Vec<PositionUpdate> {
    if items.len() < 2 {
        return Vec::new();
    }
    let count = items.len() as f64;
    let mut sorted: Vec<&MapItem> = items.to_vec();
    let mut out = Vec::new();
    match axis {
        DistributeAxis::Horizontal => {
            sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.id.cmp(&b.id)));
            let total: f64 = sorted.iter().map(|i| i.width).sum();
            let available = config.width - 2.0 * DISTRIBUTE_EDGE_MARGIN;
            let gap = (available - total) / (count - 1.0);
            let target_cy = (sorted.iter().map(|i| i.center().y).sum::<f64>() / count).round();
            let mut cursor = DISTRIBUTE_EDGE_MARGIN;
            for item in &sorted {
                push_if_moved(&mut out, item, config, cursor, target_cy - item.height * 0.5);
                cursor += item.width + gap;
            }
        }
        DistributeAxis::Vertical => {
            sorted.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.id.cmp(&b.id)));
            let total: f64 = sorted.iter().map(|i| i.height).sum();
            let available = config.height - 2.0 * DISTRIBUTE_EDGE_MARGIN;
            let gap = (available - total) / (count - 1.0);
            let target_cx = (sorted.iter().map(|i| i.center().x).sum::<f64>() / count).round();
            let mut cursor = DISTRIBUTE_EDGE_MARGIN;
            for item in &sorted {
                push_if_moved(&mut out, item, config, target_cx - item.width * 0.5, cursor);
                cursor += item.height + gap;
            }
        }
    }
    out
}
