//! Fixtures created while a test runs.
//!
//! - `auth` - RSA signing key, JWKS body, and token signing
//! - `data` - Account, artist, page, and section rows
//! - `factory` - In-memory models with standard test values

pub mod auth;
pub mod data;
pub mod factory;
