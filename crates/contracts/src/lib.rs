//! Shared data contracts between the frontend and the tracking API.
//!
//! Every struct here mirrors a JSON (or form-encoded) body that crosses
//! the wire, so field names and casing follow the API, not Rust taste.

pub mod dashboard;
pub mod system;
