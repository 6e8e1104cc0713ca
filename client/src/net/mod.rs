//! Networking modules for the reservation server's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the persistence gateway — every fetch call the editor makes goes
//! through it. `types` defines the wire schema and its conversions into the
//! engine's domain types.

pub mod api;
pub mod types;
