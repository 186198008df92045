//! Shorthand macros for tests that only need tables.

/// Creates a [`TestContext`](crate::TestContext) with tables for the given entities.
///
/// With no arguments the database is empty, so every query fails as if the store were down.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Creates a [`TestContext`](crate::TestContext) with every folio table.
#[macro_export]
macro_rules! test_setup_with_folio_tables {
    () => {{
        $crate::TestBuilder::new().with_folio_tables().build().await
    }};
}
