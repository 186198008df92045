//! Test harness for the folio server.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, rows, and mock endpoints,
//! and `build()` returns a [`TestContext`] holding the in-memory database and the mock identity
//! provider the test runs against.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::factory,
        test_setup_with_folio_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}
