use folio_test_utils::prelude::*;

use crate::model::page::{PageStatus, SectionInputDto, SectionType, UpsertPageDto};

mod resolve_visibility;

/// Account `account-1` with artist `artist-1` (slug `camille`) and no pages
async fn setup_artist() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_folio_tables()
        .with_account("account-1", "user-1", "pro")
        .with_artist("artist-1", "account-1", "camille")
        .build()
        .await
}

fn section(id: Option<&str>, section_type: SectionType) -> SectionInputDto {
    SectionInputDto {
        id: id.map(str::to_string),
        section_type,
        data: Some(serde_json::json!({ "title": section_type.as_str() })),
        is_visible: None,
    }
}

fn upsert(slug: &str, sections: Vec<SectionInputDto>) -> UpsertPageDto {
    UpsertPageDto {
        title: "Série lumière".to_string(),
        slug: slug.to_string(),
        seo_description: None,
        is_hidden: None,
        status: None,
        sections,
    }
}

fn draft(mut page: UpsertPageDto) -> UpsertPageDto {
    page.status = Some(PageStatus::Draft);
    page
}
