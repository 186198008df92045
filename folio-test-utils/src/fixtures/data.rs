//! Row inserters for folio tables.

use sea_orm::{ActiveModelTrait, DbErr, IntoActiveModel};

use crate::{
    fixtures::factory::{mock_account_model, mock_artist_model, mock_page_model, mock_section_model},
    TestContext,
};

impl TestContext {
    pub fn folio(&self) -> FolioFixtures<'_> {
        FolioFixtures { setup: self }
    }
}

pub struct FolioFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FolioFixtures<'a> {
    pub async fn insert_account(
        &self,
        id: &str,
        owner_user_id: &str,
        plan_id: &str,
    ) -> Result<entity::folio_account::Model, DbErr> {
        self.insert_account_model(mock_account_model(id, owner_user_id, plan_id))
            .await
    }

    pub async fn insert_account_model(
        &self,
        model: entity::folio_account::Model,
    ) -> Result<entity::folio_account::Model, DbErr> {
        model.into_active_model().reset_all().insert(&self.setup.db).await
    }

    pub async fn insert_artist(
        &self,
        id: &str,
        account_id: &str,
        slug: &str,
    ) -> Result<entity::folio_artist::Model, DbErr> {
        self.insert_artist_model(mock_artist_model(id, account_id, slug))
            .await
    }

    pub async fn insert_artist_model(
        &self,
        model: entity::folio_artist::Model,
    ) -> Result<entity::folio_artist::Model, DbErr> {
        model.into_active_model().reset_all().insert(&self.setup.db).await
    }

    pub async fn insert_page(
        &self,
        id: &str,
        artist_id: &str,
        slug: &str,
        order_index: i32,
        is_hidden: bool,
    ) -> Result<entity::folio_page::Model, DbErr> {
        mock_page_model(id, artist_id, slug, order_index, is_hidden)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await
    }

    pub async fn insert_section(
        &self,
        id: &str,
        page_id: &str,
        section_type: &str,
        order_index: i32,
    ) -> Result<entity::folio_page_section::Model, DbErr> {
        mock_section_model(id, page_id, section_type, order_index)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await
    }
}
