//! Wire schema for the reservation server's JSON API, and conversions into
//! the engine's domain types.
//!
//! DESIGN
//! ======
//! The server speaks `position_x` / `furniture_type` style field names and
//! wraps everything in `{ success, ... }` envelopes; the engine speaks
//! [`MapItem`] / [`MapConfig`]. Keeping the DTOs separate from the domain
//! types pins the wire contract in one reviewable place and keeps serde
//! attributes out of the engine crate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use canvas::doc::{FurnitureType, ItemId, MapConfig, MapItem, PositionUpdate, ZoneId};
use serde::{Deserialize, Serialize};

/// One furniture row as the server sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureDto {
    pub id: ItemId,
    pub zone_id: ZoneId,
    pub furniture_type: String,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub capacity: u32,
    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub fill_color: Option<String>,
}

impl FurnitureDto {
    /// Convert into the engine's item type. Wire positions are taken as-is —
    /// legacy zones carry unsnapped coordinates and loads never re-snap.
    #[must_use]
    pub fn into_item(self) -> MapItem {
        MapItem {
            id: self.id,
            zone_id: self.zone_id,
            type_key: self.furniture_type,
            number: self.number,
            capacity: self.capacity,
            x: self.position_x,
            y: self.position_y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            fill_color: self.fill_color,
        }
    }
}

/// One furniture-type registry row as the server sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureTypeDto {
    pub key: String,
    pub label: String,
    pub default_width: f64,
    pub default_height: f64,
    #[serde(default)]
    pub default_capacity: u32,
    pub color: String,
}

impl FurnitureTypeDto {
    #[must_use]
    pub fn into_type(self) -> FurnitureType {
        FurnitureType {
            key: self.key,
            label: self.label,
            default_width: self.default_width,
            default_height: self.default_height,
            default_capacity: self.default_capacity,
            color: self.color,
        }
    }
}

/// Zone payload inside the load-zone envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDto {
    #[serde(default)]
    pub furniture: Vec<FurnitureDto>,
    pub canvas_width: f64,
    pub canvas_height: f64,
    #[serde(default)]
    pub background_color: Option<String>,
}

/// Envelope for `GET {base}/zone/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub zone: Option<ZoneDto>,
    #[serde(default)]
    pub furniture_types: Option<Vec<FurnitureTypeDto>>,
}

/// Everything the editor needs after loading a zone, in engine terms.
#[derive(Debug, Clone)]
pub struct ZoneSnapshot {
    pub items: Vec<MapItem>,
    pub config: MapConfig,
    pub furniture_types: Vec<FurnitureType>,
}

impl ZoneSnapshot {
    /// Build a snapshot from a server response.
    ///
    /// A caller-supplied `dimension_override` takes precedence over the
    /// server-reported canvas dimensions when both are present. Snap size and
    /// background fall back to the engine defaults when the server omits
    /// them.
    ///
    /// # Errors
    ///
    /// Returns the server error message (or a generic fallback) when the
    /// envelope reports failure or carries no zone.
    pub fn from_response(
        response: ZoneResponse,
        dimension_override: Option<(f64, f64)>,
    ) -> Result<Self, String> {
        if !response.success {
            return Err(response.error.unwrap_or_else(|| "failed to load zone".to_owned()));
        }
        let Some(zone) = response.zone else {
            return Err("zone payload missing".to_owned());
        };
        let defaults = MapConfig::default();
        let (width, height) = dimension_override.unwrap_or((zone.canvas_width, zone.canvas_height));
        Ok(Self {
            items: zone.furniture.into_iter().map(FurnitureDto::into_item).collect(),
            config: MapConfig {
                width,
                height,
                background_color: zone.background_color.unwrap_or(defaults.background_color),
                snap_size: defaults.snap_size,
            },
            furniture_types: response
                .furniture_types
                .unwrap_or_default()
                .into_iter()
                .map(FurnitureTypeDto::into_type)
                .collect(),
        })
    }
}

/// Body for `POST {base}/furniture`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFurnitureRequest {
    pub zone_id: ZoneId,
    pub furniture_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    pub capacity: u32,
    pub position_x: f64,
    pub position_y: f64,
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
}

/// Envelope for the create call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFurnitureResponse {
    pub success: bool,
    #[serde(default)]
    pub furniture_id: Option<ItemId>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for `GET {base}/furniture/next-number/{zone}/{type}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NextNumberResponse {
    pub success: bool,
    #[serde(default)]
    pub next_number: Option<i64>,
}

/// Body for `PUT {base}/furniture/{id}/position`.
#[derive(Debug, Clone, Serialize)]
pub struct PositionBody {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// Body for `PUT {base}/furniture/batch-position`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchPositionRequest<'a> {
    pub updates: &'a [PositionUpdate],
}

/// Body for `DELETE {base}/furniture/batch-delete`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchDeleteRequest<'a> {
    pub ids: &'a [ItemId],
}

/// Generic `{ success, error? }` envelope for mutating calls.
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl AckResponse {
    /// Collapse the envelope into a result, surfacing the server-provided
    /// message when present and a generic fallback otherwise.
    ///
    /// # Errors
    ///
    /// Returns the server error message when `success` is false.
    pub fn into_result(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self.error.unwrap_or_else(|| "request failed".to_owned()))
        }
    }
}
