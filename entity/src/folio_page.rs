use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "folio_page")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub artist_id: String,
    pub title: String,
    pub slug: String,
    pub seo_description: Option<String>,
    pub is_hidden: bool,
    pub order_index: i32,
    pub version: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::folio_artist::Entity",
        from = "Column::ArtistId",
        to = "super::folio_artist::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FolioArtist,
    #[sea_orm(has_many = "super::folio_page_section::Entity")]
    FolioPageSection,
}

impl Related<super::folio_artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FolioArtist.def()
    }
}

impl Related<super::folio_page_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FolioPageSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
