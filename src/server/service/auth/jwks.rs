//! RS256 token verification with a refreshable JWKS cache.
//!
//! Keys are fetched from `{base}/auth/v1/certs` and cached for a configurable lifetime. A token
//! whose `kid` is not in the cached set, or whose signature fails against it, triggers one
//! forced refresh before the token is rejected, so key rotation on the provider side is picked
//! up without waiting for the cache to expire. Forced refreshes are at most one per cooldown
//! window; within it, unknown key ids are rejected against the cached set.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use jsonwebtoken::{
    decode, decode_header,
    errors::ErrorKind,
    jwk::JwkSet,
    Algorithm, DecodingKey, Validation,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{model::account::AuthUserDto, server::error::auth::AuthError};

/// `aud` claim, which providers send either as a string or an array.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Audience {
    /// Single audience
    One(String),
    /// Several audiences
    Many(Vec<String>),
}

impl Audience {
    /// First audience value.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(aud) => Some(aud),
            Self::Many(auds) => auds.first().map(String::as_str),
        }
    }
}

/// Claims read from a verified access token.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthClaims {
    /// Identity provider user id
    pub sub: String,
    /// User email
    #[serde(default)]
    pub email: Option<String>,
    /// Provider role, e.g. `authenticated`
    #[serde(default)]
    pub role: Option<String>,
    /// Audience
    #[serde(default)]
    pub aud: Option<Audience>,
    /// Expiry as a Unix timestamp
    pub exp: u64,
}

impl From<AuthClaims> for AuthUserDto {
    fn from(claims: AuthClaims) -> Self {
        Self {
            aud: claims.aud.as_ref().and_then(Audience::first).map(str::to_string),
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

struct CachedKeys {
    keys: Arc<JwkSet>,
    fetched_at: Instant,
    /// Last refresh triggered by a verification failure
    forced_at: Option<Instant>,
}

impl CachedKeys {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }

    fn in_cooldown(&self, cooldown: Duration) -> bool {
        self.forced_at.is_some_and(|at| at.elapsed() < cooldown)
    }
}

/// Verifies bearer tokens issued by the identity provider.
///
/// Cheap to clone; clones share the key cache.
#[derive(Clone)]
pub struct JwtVerifier {
    http: reqwest::Client,
    jwks_url: String,
    issuer: String,
    audience: String,
    ttl: Duration,
    refresh_cooldown: Duration,
    cache: Arc<RwLock<Option<CachedKeys>>>,
}

impl JwtVerifier {
    /// Key set cache lifetime used when none is configured.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

    /// Minimum time between two refreshes forced by unknown keys or failed signatures.
    pub const DEFAULT_REFRESH_COOLDOWN: Duration = Duration::from_secs(30);

    /// Creates a verifier for the provider at `auth_base_url`.
    ///
    /// The issuer is `{auth_base_url}/auth/v1` and keys are read from
    /// `{auth_base_url}/auth/v1/certs`.
    pub fn new(auth_base_url: &str, audience: &str, ttl: Duration) -> Self {
        let base = auth_base_url.trim_end_matches('/');

        Self {
            http: reqwest::Client::new(),
            jwks_url: format!("{}/auth/v1/certs", base),
            issuer: format!("{}/auth/v1", base),
            audience: audience.to_string(),
            ttl,
            refresh_cooldown: Self::DEFAULT_REFRESH_COOLDOWN,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Overrides [`Self::DEFAULT_REFRESH_COOLDOWN`].
    pub fn with_refresh_cooldown(mut self, cooldown: Duration) -> Self {
        self.refresh_cooldown = cooldown;
        self
    }

    /// Verifies the token signature and its issuer, audience, and validity window.
    ///
    /// # Returns
    /// - `Ok(AuthClaims)`: The token is valid
    /// - `Err(AuthError::MalformedToken)`: The token header could not be decoded
    /// - `Err(AuthError::UnknownSigningKey)`: No key matches the token's `kid`, even after refresh
    /// - `Err(AuthError::InvalidSignature)`: Signature check failed, even after refresh
    /// - `Err(AuthError::TokenExpired | TokenNotYetValid | InvalidClaims)`: Claim checks failed
    /// - `Err(AuthError::KeySetUnavailable)`: The key set could not be fetched
    pub async fn verify(&self, token: &str) -> Result<AuthClaims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::MalformedToken)?;
        let kid = header.kid.ok_or(AuthError::UnknownSigningKey)?;

        let (keys, fresh) = self.key_set(false).await?;

        match self.decode_with(&keys, &kid, token) {
            Err(AuthError::UnknownSigningKey | AuthError::InvalidSignature) if !fresh => {
                tracing::debug!(kid = %kid, "Refreshing key set after verification failure");

                let (keys, _) = self.key_set(true).await?;
                self.decode_with(&keys, &kid, token)
            }
            result => result,
        }
    }

    fn decode_with(&self, keys: &JwkSet, kid: &str, token: &str) -> Result<AuthClaims, AuthError> {
        let jwk = keys.find(kid).ok_or(AuthError::UnknownSigningKey)?;
        let key = DecodingKey::from_jwk(jwk).map_err(|_| AuthError::UnknownSigningKey)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = 0;
        validation.validate_nbf = true;

        decode::<AuthClaims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
                ErrorKind::InvalidIssuer
                | ErrorKind::InvalidAudience
                | ErrorKind::InvalidSubject
                | ErrorKind::MissingRequiredClaim(_)
                | ErrorKind::Json(_) => AuthError::InvalidClaims,
                _ => AuthError::MalformedToken,
            })
    }

    /// Returns the cached key set, fetching it when missing, stale, or `force_refresh` is set.
    ///
    /// A forced refresh inside the cooldown window returns the cached keys instead.
    /// The boolean is true when the keys were fetched by this call.
    async fn key_set(&self, force_refresh: bool) -> Result<(Arc<JwkSet>, bool), AuthError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref().filter(|c| self.can_reuse(c, force_refresh)) {
                return Ok((cached.keys.clone(), false));
            }
        }

        let mut cache = self.cache.write().await;

        // Another request may have refreshed while this one waited for the lock
        if let Some(cached) = cache.as_ref().filter(|c| self.can_reuse(c, force_refresh)) {
            return Ok((cached.keys.clone(), false));
        }

        let keys = Arc::new(self.fetch_key_set().await?);
        let now = Instant::now();
        let forced_at = match force_refresh {
            true => Some(now),
            false => cache.as_ref().and_then(|c| c.forced_at),
        };
        *cache = Some(CachedKeys {
            keys: keys.clone(),
            fetched_at: now,
            forced_at,
        });

        Ok((keys, true))
    }

    fn can_reuse(&self, cached: &CachedKeys, force_refresh: bool) -> bool {
        match force_refresh {
            true => cached.in_cooldown(self.refresh_cooldown),
            false => cached.is_fresh(self.ttl),
        }
    }

    async fn fetch_key_set(&self) -> Result<JwkSet, AuthError> {
        tracing::debug!(url = %self.jwks_url, "Fetching key set");

        let unavailable = |err: reqwest::Error| AuthError::KeySetUnavailable(err.to_string());

        self.http
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json::<JwkSet>()
            .await
            .map_err(unavailable)
    }
}
