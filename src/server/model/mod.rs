//! Server application models and type definitions.
//!
//! This module contains the shared application state, database model type aliases, and the
//! [`source::Sourced`] wrapper that marks whether read data came from the store or from
//! fixtures.

pub mod account;
pub mod app;
pub mod db;
pub mod source;
