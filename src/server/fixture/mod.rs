//! Static demo data served when the store cannot answer.
//!
//! Every read that substitutes this data reports it through
//! [`Sourced::Degraded`](crate::server::model::source::Sourced).

pub mod account;
pub mod runtime;
