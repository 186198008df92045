//! `SeaORM` entities for the folio schema.

pub mod prelude;

pub mod folio_account;
pub mod folio_artist;
pub mod folio_page;
pub mod folio_page_section;
