//! Helpers for reading handler responses.

use axum::{body::Body, http::Response};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

/// Collects the response body and deserializes it as JSON.
pub async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes();

    serde_json::from_slice(&bytes).expect("response body is not the expected JSON")
}

/// Value of a response header as a string slice.
pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}
