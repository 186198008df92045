//! Signing key, key set, and tokens for the mock identity provider.

use std::sync::LazyLock;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mockito::{Mock, ServerGuard};
use openssl::rsa::Rsa;
use serde_json::{json, Value};

use crate::{
    constant::{TEST_AUDIENCE, TEST_KEY_ID, TEST_USER_EMAIL},
    error::TestError,
    TestContext,
};

/// Path of the key set relative to the provider base URL.
pub static JWKS_PATH: &str = "/auth/v1/certs";

struct TestKey {
    private_pem: Vec<u8>,
    jwks: Value,
}

// RSA key generation is slow, share one key across the test binary
static TEST_KEY: LazyLock<TestKey> = LazyLock::new(|| {
    let rsa = Rsa::generate(2048).expect("Failed to generate RSA key");

    let n = URL_SAFE_NO_PAD.encode(rsa.n().to_vec());
    let e = URL_SAFE_NO_PAD.encode(rsa.e().to_vec());

    TestKey {
        private_pem: rsa
            .private_key_to_pem()
            .expect("Failed to export RSA private key"),
        jwks: json!({
            "keys": [{
                "kty": "RSA",
                "use": "sig",
                "alg": "RS256",
                "kid": TEST_KEY_ID,
                "n": n,
                "e": e,
            }]
        }),
    }
});

/// JWKS document publishing the test key.
pub fn jwks_body() -> Value {
    TEST_KEY.jwks.clone()
}

/// Registers `GET /auth/v1/certs` serving [`jwks_body`], expected `expected_requests` times.
pub fn create_jwks_endpoint(server: &mut ServerGuard, expected_requests: usize) -> Mock {
    server
        .mock("GET", JWKS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(jwks_body().to_string())
        .expect(expected_requests)
        .create()
}

impl TestContext {
    pub fn auth(&self) -> AuthFixtures<'_> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Issuer the server derives from the mock provider URL.
    pub fn issuer(&self) -> String {
        format!("{}/auth/v1", self.setup.auth_base_url())
    }

    /// Valid claims for `sub`, expiring in 15 minutes.
    ///
    /// Returned as JSON so tests can break individual claims.
    pub fn claims(&self, sub: &str) -> Value {
        let now = Utc::now().timestamp();

        json!({
            "iss": self.issuer(),
            "sub": sub,
            "aud": TEST_AUDIENCE,
            "email": TEST_USER_EMAIL,
            "role": "authenticated",
            "iat": now,
            "exp": now + 900,
        })
    }

    /// Signs `claims` with the published key.
    pub fn sign_token(&self, claims: &Value) -> Result<String, TestError> {
        self.sign_token_with_kid(claims, TEST_KEY_ID)
    }

    /// Signs `claims` with the test key under an arbitrary key id.
    pub fn sign_token_with_kid(&self, claims: &Value, kid: &str) -> Result<String, TestError> {
        let key = EncodingKey::from_rsa_pem(&TEST_KEY.private_pem)?;

        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(kid.to_string());

        Ok(encode(&header, claims, &key)?)
    }

    /// `Bearer <token>` header value for a valid token of `sub`.
    pub fn bearer(&self, sub: &str) -> Result<String, TestError> {
        Ok(format!("Bearer {}", self.sign_token(&self.claims(sub))?))
    }
}
