//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment: an in-memory SQLite database and a mock identity provider.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_folio_tables()
///     .with_account("account-1", "user-123", "pro")
///     .with_jwks_endpoint(1)
///     .build()
///     .await?;
///
/// let state: AppState = test.state();
/// let token = test.auth().sign_token(&test.auth().claims("user-123"))?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory database
    pub db: DatabaseConnection,

    /// Mock identity provider serving the key set
    pub(crate) server: ServerGuard,
    /// Mock endpoints checked by [`TestContext::assert_mocks`]
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock identity provider.
    pub fn auth_base_url(&self) -> String {
        self.server.url()
    }

    /// Builds application state from the database and the mock provider URL.
    ///
    /// Generic over the target so this crate does not depend on the server crate.
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), self.auth_base_url()))
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Asserts every mock endpoint was hit the expected number of times.
    ///
    /// # Panics
    /// Panics on the first mock whose expectation was not met.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
