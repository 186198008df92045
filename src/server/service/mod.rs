//! Service layer for business logic.
//!
//! Services coordinate repositories, the plan catalog, and the demo fixtures. Reads that may
//! substitute demo data return [`Sourced`](crate::server::model::source::Sourced) values;
//! writes always go to the store.

pub mod account;
/// Artist listing and creation
pub mod artist;
pub mod auth;
/// Page builder reads and transactional writes
pub mod page;
pub mod plan;
pub mod runtime;
