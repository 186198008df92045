//! Request and response types shared by the HTTP API.
//!
//! Every type here serializes to camelCase JSON and derives `utoipa::ToSchema` so it shows up
//! in the generated OpenAPI document.

pub mod account;
pub mod api;
pub mod artist;
pub mod page;
pub mod plan;
pub mod runtime;
