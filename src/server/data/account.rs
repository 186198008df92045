//! Account lookups.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Queries on `folio_account`
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an account by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::folio_account::Model>, DbErr> {
        entity::prelude::FolioAccount::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Finds the account owned by an identity provider user
    pub async fn find_by_owner(
        &self,
        owner_user_id: &str,
    ) -> Result<Option<entity::folio_account::Model>, DbErr> {
        entity::prelude::FolioAccount::find()
            .filter(entity::folio_account::Column::OwnerUserId.eq(owner_user_id))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod find_by_owner {
        use folio_test_utils::prelude::*;

        use crate::server::data::account::AccountRepository;

        /// Expect Some when the user owns an account
        #[tokio::test]
        async fn finds_owned_account() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_folio_tables()
                .with_account("account-1", "user-1", "pro")
                .build()
                .await?;

            let result = AccountRepository::new(&test.db).find_by_owner("user-1").await;

            assert!(matches!(result, Ok(Some(ref account)) if account.id == "account-1"));

            Ok(())
        }

        /// Expect None when the user owns no account
        #[tokio::test]
        async fn returns_none_for_unknown_owner() -> Result<(), TestError> {
            let test = test_setup_with_folio_tables!()?;

            let result = AccountRepository::new(&test.db).find_by_owner("user-2").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = AccountRepository::new(&test.db).find_by_owner("user-1").await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
