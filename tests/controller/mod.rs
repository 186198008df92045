//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their axum extractors against an in-memory store.

mod account;
mod artist;
mod page;
mod plan;
mod runtime;

use folio_test_utils::prelude::*;

use crate::util::{body_json, header};
