//! Hit-testing pointer positions against zone items.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{ItemId, ItemStore, MapItem};

/// Whether a canvas point falls inside an item's footprint, honoring the
/// item's rotation.
///
/// The point is transformed into the item's local frame by rotating it around
/// the item center by the negative rotation, then tested against the
/// axis-aligned half-extents.
#[must_use]
pub fn point_in_item(pt: Point, item: &MapItem) -> bool {
    let center = item.center();
    let dx = pt.x - center.x;
    let dy = pt.y - center.y;
    let (sin, cos) = (-item.rotation).to_radians().sin_cos();
    let local_x = dx * cos - dy * sin;
    let local_y = dx * sin + dy * cos;
    local_x.abs() <= item.width * 0.5 && local_y.abs() <= item.height * 0.5
}

/// The topmost item under `pt`, or `None` when the point is over empty
/// canvas. Later-created items (higher ids) draw above earlier ones, so the
/// highest id wins when footprints overlap.
#[must_use]
pub fn hit_test(pt: Point, store: &ItemStore) -> Option<ItemId> {
    store
        .sorted_items()
        .iter()
        .rev()
        .find(|item| point_in_item(pt, item))
        .map(|item| item.id)
}
