use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::error::page::PageError;

/// `ETag` value for a page version
pub fn version_etag(version: i32) -> String {
    format!("\"{}\"", version)
}

/// Page version required by the `If-Match` header
///
/// Returns `None` when the header is absent or `*`. Accepts `"3"`, `W/"3"` and a bare `3`.
pub fn expected_version(headers: &HeaderMap) -> Result<Option<i32>, PageError> {
    let Some(value) = headers.get(header::IF_MATCH) else {
        return Ok(None);
    };

    let raw = value
        .to_str()
        .map_err(|_| PageError::InvalidIfMatch(lossy(value)))?
        .trim();

    if raw == "*" {
        return Ok(None);
    }

    let tag = raw.strip_prefix("W/").unwrap_or(raw);
    let tag = tag
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(tag);

    tag.parse::<i32>()
        .map(Some)
        .map_err(|_| PageError::InvalidIfMatch(raw.to_string()))
}

fn lossy(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderMap, HeaderValue};

    use super::*;

    fn if_match(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_MATCH, HeaderValue::from_static(value));
        headers
    }

    /// Expect no version requirement without header or with a wildcard
    #[test]
    fn accepts_any_version() {
        assert_eq!(expected_version(&HeaderMap::new()).unwrap(), None);
        assert_eq!(expected_version(&if_match("*")).unwrap(), None);
    }

    /// Expect quoted, weak, and bare tags to be read
    #[test]
    fn reads_version_tags() {
        assert_eq!(expected_version(&if_match("\"3\"")).unwrap(), Some(3));
        assert_eq!(expected_version(&if_match("W/\"12\"")).unwrap(), Some(12));
        assert_eq!(expected_version(&if_match("4")).unwrap(), Some(4));
    }

    /// Expect tags that are not versions to be rejected
    #[test]
    fn rejects_foreign_tags() {
        assert!(matches!(
            expected_version(&if_match("\"abc\"")),
            Err(PageError::InvalidIfMatch(_))
        ));
    }

    /// Expect the ETag to round into If-Match
    #[test]
    fn formats_etag() {
        assert_eq!(version_etag(7), "\"7\"");
    }
}
