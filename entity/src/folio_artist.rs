use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "folio_artist")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub account_id: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub display_name: String,
    pub tagline: Option<String>,
    pub plan_id: Option<String>,
    #[sea_orm(unique)]
    pub custom_domain: Option<String>,
    pub subdomain: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub theme: Option<Json>,
    pub accent_color: Option<String>,
    pub seo_description: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub navigation: Option<Json>,
    pub storage_usage_mb: Option<i64>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::folio_account::Entity",
        from = "Column::AccountId",
        to = "super::folio_account::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FolioAccount,
    #[sea_orm(has_many = "super::folio_page::Entity")]
    FolioPage,
}

impl Related<super::folio_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FolioAccount.def()
    }
}

impl Related<super::folio_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FolioPage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
