use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "folio_page_section")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub page_id: String,
    pub section_type: String,
    #[sea_orm(column_type = "Json")]
    pub data: Json,
    pub is_visible: bool,
    pub order_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::folio_page::Entity",
        from = "Column::PageId",
        to = "super::folio_page::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FolioPage,
}

impl Related<super::folio_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FolioPage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
