//! Utility functions shared by services and controllers.
//!
//! Host normalization for tenant resolution, slug handling for artists and pages, and the
//! field checks applied to incoming request bodies.

pub mod host;
pub mod slug;
pub mod validation;
