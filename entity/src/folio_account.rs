use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "folio_account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub owner_user_id: String,
    pub name: String,
    pub plan_id: String,
    pub status: String,
    pub storage_usage_mb: Option<i64>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::folio_artist::Entity")]
    FolioArtist,
}

impl Related<super::folio_artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FolioArtist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
