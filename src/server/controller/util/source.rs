use axum::http::{HeaderMap, HeaderValue};

use crate::server::model::source::Sourced;

/// `live` or `fixture`
pub static DATA_SOURCE_HEADER: &str = "x-data-source";
/// Set on fixture responses only, holds [`FallbackCause::label`](crate::server::model::source::FallbackCause::label)
pub static FALLBACK_CAUSE_HEADER: &str = "x-fallback-cause";

/// Response headers telling where the data of `sourced` came from
pub fn source_headers<T>(sourced: &Sourced<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();

    match sourced.cause() {
        None => {
            headers.insert(DATA_SOURCE_HEADER, HeaderValue::from_static("live"));
        }
        Some(cause) => {
            headers.insert(DATA_SOURCE_HEADER, HeaderValue::from_static("fixture"));
            headers.insert(FALLBACK_CAUSE_HEADER, HeaderValue::from_static(cause.label()));
        }
    }

    headers
}
