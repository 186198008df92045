//! Environment-driven server configuration.

use std::time::Duration;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3333";
static DEFAULT_AUTH_AUDIENCE: &str = "authenticated";
const DEFAULT_JWKS_TTL_SECS: u64 = 600;

/// Server settings read from environment variables.
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Identity provider base URL, issuer and key set URLs are derived from it.
    pub auth_base_url: String,
    /// Audience every access token must carry.
    pub auth_audience: String,
    /// Lifetime of the cached JSON Web Key Set.
    pub jwks_ttl: Duration,
    /// Socket address the HTTP server listens on.
    pub bind_address: String,
    /// Serve fixture data when the store fails or has no matching record.
    pub fixture_fallback: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `AUTH_BASE_URL` is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable holds an unparsable value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String, ConfigError> {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let jwks_ttl_secs = match lookup("JWKS_TTL_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "JWKS_TTL_SECS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_JWKS_TTL_SECS,
        };

        let fixture_fallback = match lookup("FIXTURE_FALLBACK") {
            Some(value) => parse_bool("FIXTURE_FALLBACK", &value)?,
            None => true,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            auth_base_url: required("AUTH_BASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            auth_audience: lookup("AUTH_AUDIENCE")
                .unwrap_or_else(|| DEFAULT_AUTH_AUDIENCE.to_string()),
            jwks_ttl: Duration::from_secs(jwks_ttl_secs),
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            fixture_fallback,
        })
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |var| vars.get(var).cloned()
    }

    /// Expect defaults for every optional variable
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/folio"),
            ("AUTH_BASE_URL", "https://auth.example.com/"),
        ]))
        .unwrap();

        assert_eq!(config.auth_base_url, "https://auth.example.com");
        assert_eq!(config.auth_audience, "authenticated");
        assert_eq!(config.jwks_ttl, Duration::from_secs(600));
        assert_eq!(config.bind_address, "0.0.0.0:3333");
        assert!(config.fixture_fallback);
    }

    /// Expect MissingEnvVar when the database URL is absent
    #[test]
    fn fails_without_database_url() {
        let result = Config::from_lookup(lookup_from(&[("AUTH_BASE_URL", "https://a.example")]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "DATABASE_URL"));
    }

    /// Expect InvalidEnvValue for a non boolean fallback flag
    #[test]
    fn rejects_invalid_fallback_flag() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/folio"),
            ("AUTH_BASE_URL", "https://auth.example.com"),
            ("FIXTURE_FALLBACK", "maybe"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "FIXTURE_FALLBACK"
        ));
    }

    /// Expect the fallback to be switched off explicitly
    #[test]
    fn disables_fixture_fallback() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/folio"),
            ("AUTH_BASE_URL", "https://auth.example.com"),
            ("FIXTURE_FALLBACK", "false"),
            ("JWKS_TTL_SECS", "30"),
        ]))
        .unwrap();

        assert!(!config.fixture_fallback);
        assert_eq!(config.jwks_ttl, Duration::from_secs(30));
    }
}
