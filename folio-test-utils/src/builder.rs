//! Declarative test setup.
//!
//! Tables, rows, and mock endpoints are queued on a [`TestBuilder`] and created in that order by
//! `build()`.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    error::TestError,
    fixtures::{
        auth::create_jwks_endpoint,
        factory::{mock_account_model, mock_artist_model},
    },
    TestContext,
};

/// Builder for test environments.
///
/// Leaving tables out is how tests simulate an unavailable store: every query against a
/// missing table fails with a database error.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_folio_tables: bool,

    accounts: Vec<entity::folio_account::Model>,
    artists: Vec<entity::folio_artist::Model>,
    pages: Vec<(String, String, String, bool)>, // (page_id, artist_id, slug, is_hidden)

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    jwks_endpoints: Vec<usize>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_folio_tables: false,
            accounts: Vec::new(),
            artists: Vec::new(),
            pages: Vec::new(),
            mock_builders: Vec::new(),
            jwks_endpoints: Vec::new(),
        }
    }

    /// Creates the account, artist, page, and section tables.
    pub fn with_folio_tables(mut self) -> Self {
        self.include_folio_tables = true;
        self
    }

    /// Creates the table of a single entity.
    ///
    /// ```no_run
    /// use folio_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), folio_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(FolioAccount)
    ///     .with_table(FolioArtist)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Inserts an account owned by `owner_user_id`.
    pub fn with_account(mut self, id: &str, owner_user_id: &str, plan_id: &str) -> Self {
        self.accounts
            .push(mock_account_model(id, owner_user_id, plan_id));
        self
    }

    /// Inserts an artist; the account must be queued or inserted first.
    pub fn with_artist(mut self, id: &str, account_id: &str, slug: &str) -> Self {
        self.artists.push(mock_artist_model(id, account_id, slug));
        self
    }

    /// Inserts a fully specified artist row.
    pub fn with_artist_model(mut self, model: entity::folio_artist::Model) -> Self {
        self.artists.push(model);
        self
    }

    /// Inserts a page at the end of its artist's page order.
    pub fn with_page(mut self, id: &str, artist_id: &str, slug: &str, is_hidden: bool) -> Self {
        self.pages.push((
            id.to_string(),
            artist_id.to_string(),
            slug.to_string(),
            is_hidden,
        ));
        self
    }

    /// Serves the test key set, expected to be fetched `expected_requests` times.
    pub fn with_jwks_endpoint(mut self, expected_requests: usize) -> Self {
        self.jwks_endpoints.push(expected_requests);
        self
    }

    /// Adds an arbitrary mock endpoint on the identity provider server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Creates tables, then rows, then mock endpoints.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Tables
        let mut all_tables = Vec::new();

        if self.include_folio_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::FolioAccount),
                schema.create_table_from_entity(entity::prelude::FolioArtist),
                schema.create_table_from_entity(entity::prelude::FolioPage),
                schema.create_table_from_entity(entity::prelude::FolioPageSection),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Rows
        for account in self.accounts {
            setup.folio().insert_account_model(account).await?;
        }

        for artist in self.artists {
            setup.folio().insert_artist_model(artist).await?;
        }

        let mut next_order: Vec<(String, i32)> = Vec::new();
        for (page_id, artist_id, slug, is_hidden) in self.pages {
            let order_index = match next_order.iter_mut().find(|(id, _)| *id == artist_id) {
                Some((_, next)) => {
                    *next += 1;
                    *next
                }
                None => {
                    next_order.push((artist_id.clone(), 0));
                    0
                }
            };

            setup
                .folio()
                .insert_page(&page_id, &artist_id, &slug, order_index, is_hidden)
                .await?;
        }

        // 3. Mock endpoints, custom ones first so tests can queue an error before a success
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for expected in self.jwks_endpoints {
            mocks.push(create_jwks_endpoint(&mut setup.server, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
