pub use sea_orm_migration::prelude::*;

mod m20250301_000001_folio_account;
mod m20250301_000002_folio_artist;
mod m20250301_000003_folio_page;
mod m20250301_000004_folio_page_section;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_folio_account::Migration),
            Box::new(m20250301_000002_folio_artist::Migration),
            Box::new(m20250301_000003_folio_page::Migration),
            Box::new(m20250301_000004_folio_page_section::Migration),
        ]
    }
}
