//! Server application core modules.
//!
//! This module contains all server-side functionality for folio: HTTP routing, bearer token
//! authentication, the sea-orm data layer, tenant resolution, page builder persistence, plan
//! limit evaluation, and the static fixture data served when the store cannot answer.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod fixture;
pub mod model;
pub mod router;
pub mod service;
/// Database connection and application state construction
pub mod startup;
pub mod util;
