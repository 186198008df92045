use crate::{model::page::PageStatus, server::service::page::resolve_visibility};

/// Expect status to decide visibility even when isHidden disagrees
#[test]
fn status_takes_precedence() {
    assert_eq!(resolve_visibility(Some(PageStatus::Draft), Some(false)), Some(true));
    assert_eq!(resolve_visibility(Some(PageStatus::Published), Some(true)), Some(false));
}

/// Expect isHidden to apply when no status is given
#[test]
fn falls_back_to_hidden_flag() {
    assert_eq!(resolve_visibility(None, Some(true)), Some(true));
    assert_eq!(resolve_visibility(None, Some(false)), Some(false));
}

/// Expect no decision when neither field is given
#[test]
fn undecided_without_fields() {
    assert_eq!(resolve_visibility(None, None), None);
}
