//! Bearer token verification against the identity provider's key set.

pub mod jwks;
