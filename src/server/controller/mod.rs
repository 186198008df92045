//! HTTP controller endpoints for the folio API.
//!
//! Axum handlers for tenant resolution, the artist and page builder API, accounts, and the plan
//! catalog. Handlers build a service from [`AppState`](crate::server::model::app::AppState),
//! attach provenance headers to reads that may be served from demo data, and document
//! themselves for OpenAPI through utoipa.

/// Current account endpoints
pub mod account;
/// Artist endpoints
pub mod artist;
/// Authenticated profile endpoint
pub mod auth;
/// Liveness endpoint
pub mod health;
/// Page builder endpoints
pub mod page;
/// Plan catalog endpoint
pub mod plan;
/// Public site runtime endpoints
pub mod runtime;
pub mod util;
