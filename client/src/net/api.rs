//! Persistence gateway: REST calls to the reservation server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! fetch degrades to a user-facing notice, never a crash. Server-reported
//! business failures (`success: false`) surface the server's own message
//! when it provides one.
//!
//! Every mutating request carries the anti-forgery token read from the
//! page's `<meta name="csrf-token">` tag.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use canvas::doc::{ItemId, PositionUpdate, ZoneId};

#[cfg(feature = "hydrate")]
use super::types::{
    AckResponse, BatchDeleteRequest, BatchPositionRequest, CreateFurnitureResponse,
    NextNumberResponse, PositionBody, ZoneResponse,
};
use super::types::{CreateFurnitureRequest, ZoneSnapshot};

/// Mount point of the map-editor API on the reservation server.
const API_BASE: &str = "/api/map";

/// Header carrying the anti-forgery token on mutating requests.
#[cfg(any(test, feature = "hydrate"))]
const CSRF_HEADER: &str = "X-CSRF-Token";

#[cfg(any(test, feature = "hydrate"))]
fn zone_endpoint(zone_id: ZoneId) -> String {
    format!("{API_BASE}/zone/{zone_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn furniture_endpoint() -> String {
    format!("{API_BASE}/furniture")
}

#[cfg(any(test, feature = "hydrate"))]
fn next_number_endpoint(zone_id: ZoneId, type_key: &str) -> String {
    format!("{API_BASE}/furniture/next-number/{zone_id}/{type_key}")
}

#[cfg(any(test, feature = "hydrate"))]
fn property_endpoint(id: ItemId) -> String {
    format!("{API_BASE}/furniture/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn position_endpoint(id: ItemId) -> String {
    format!("{API_BASE}/furniture/{id}/position")
}

#[cfg(any(test, feature = "hydrate"))]
fn batch_position_endpoint() -> String {
    format!("{API_BASE}/furniture/batch-position")
}

#[cfg(any(test, feature = "hydrate"))]
fn batch_delete_endpoint() -> String {
    format!("{API_BASE}/furniture/batch-delete")
}

#[cfg(any(test, feature = "hydrate"))]
fn http_error_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Read the anti-forgery token from the page's meta tags.
#[cfg(feature = "hydrate")]
fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector("meta[name='csrf-token']").ok().flatten()?;
    meta.get_attribute("content")
}

#[cfg(feature = "hydrate")]
fn with_csrf(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match csrf_token() {
        Some(token) => builder.header(CSRF_HEADER, &token),
        None => builder,
    }
}

/// Load a zone: its furniture list, type registry, and canvas settings.
///
/// `dimension_override` (when the embedding page supplies one) takes
/// precedence over the server-reported canvas dimensions.
///
/// # Errors
///
/// Returns an error string on network failure, non-2xx status, or a
/// `success: false` envelope.
pub async fn fetch_zone(
    zone_id: ZoneId,
    dimension_override: Option<(f64, f64)>,
) -> Result<ZoneSnapshot, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&zone_endpoint(zone_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_error_message(resp.status()));
        }
        let body: ZoneResponse = resp.json().await.map_err(|e| e.to_string())?;
        ZoneSnapshot::from_response(body, dimension_override)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (zone_id, dimension_override);
        Err("not available on server".to_owned())
    }
}

/// Create a furniture item; the server issues and returns its id.
///
/// # Errors
///
/// Returns an error string on network failure, non-2xx status, or a
/// `success: false` envelope.
pub async fn create_furniture(request: &CreateFurnitureRequest) -> Result<ItemId, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_csrf(gloo_net::http::Request::post(&furniture_endpoint()))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_error_message(resp.status()));
        }
        let body: CreateFurnitureResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.success {
            return Err(body.error.unwrap_or_else(|| "create failed".to_owned()));
        }
        body.furniture_id.ok_or_else(|| "create response missing id".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Ask the server for the next free display number for a furniture type.
///
/// # Errors
///
/// Returns an error string on network failure or a failure envelope.
pub async fn fetch_next_number(zone_id: ZoneId, type_key: &str) -> Result<i64, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&next_number_endpoint(zone_id, type_key))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_error_message(resp.status()));
        }
        let body: NextNumberResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.success {
            return Err("next-number lookup failed".to_owned());
        }
        body.next_number.ok_or_else(|| "next-number response missing value".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (zone_id, type_key);
        Err("not available on server".to_owned())
    }
}

/// Update a single item property, e.g. `{"capacity": 4}`.
///
/// # Errors
///
/// Returns an error string on network failure or a failure envelope.
pub async fn update_property(id: ItemId, body: &serde_json::Value) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_csrf(gloo_net::http::Request::put(&property_endpoint(id)))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_error_message(resp.status()));
        }
        let ack: AckResponse = resp.json().await.map_err(|e| e.to_string())?;
        ack.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, body);
        Err("not available on server".to_owned())
    }
}

/// Update one item's position and rotation.
///
/// # Errors
///
/// Returns an error string on network failure or a failure envelope.
pub async fn update_position(id: ItemId, x: f64, y: f64, rotation: f64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = PositionBody { x, y, rotation };
        let resp = with_csrf(gloo_net::http::Request::put(&position_endpoint(id)))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_error_message(resp.status()));
        }
        let ack: AckResponse = resp.json().await.map_err(|e| e.to_string())?;
        ack.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, x, y, rotation);
        Err("not available on server".to_owned())
    }
}

/// Persist one gesture's worth of moves as a single batched request.
///
/// # Errors
///
/// Returns an error string on network failure or a failure envelope.
pub async fn update_positions(updates: &[PositionUpdate]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = BatchPositionRequest { updates };
        let resp = with_csrf(gloo_net::http::Request::put(&batch_position_endpoint()))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_error_message(resp.status()));
        }
        let ack: AckResponse = resp.json().await.map_err(|e| e.to_string())?;
        ack.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = updates;
        Err("not available on server".to_owned())
    }
}

/// Delete one or more items in a single request.
///
/// # Errors
///
/// Returns an error string on network failure or a failure envelope; the
/// server-provided message is surfaced to the user when present.
pub async fn delete_furniture(ids: &[ItemId]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = BatchDeleteRequest { ids };
        let resp = with_csrf(gloo_net::http::Request::delete(&batch_delete_endpoint()))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_error_message(resp.status()));
        }
        let ack: AckResponse = resp.json().await.map_err(|e| e.to_string())?;
        ack.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ids;
        Err("not available on server".to_owned())
    }
}
