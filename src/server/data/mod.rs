//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each and are generic over
//! [`sea_orm::ConnectionTrait`], so the same code runs against a connection or inside a
//! transaction.

pub mod account;
pub mod artist;
pub mod page;
pub mod section;
