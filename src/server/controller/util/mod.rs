//! Request and response helpers shared by controllers.
//!
//! Holds the bearer-token extractor for protected endpoints, the provenance headers attached
//! to reads that may be served from demo data, and `If-Match` parsing for page writes.

/// Bearer token extractor
pub mod auth_user;
/// Page version ETag and `If-Match` parsing
pub mod if_match;
/// Data provenance headers
pub mod source;
