pub use super::folio_account::Entity as FolioAccount;
pub use super::folio_artist::Entity as FolioArtist;
pub use super::folio_page::Entity as FolioPage;
pub use super::folio_page_section::Entity as FolioPageSection;
