//! Identity values shared by the fixtures.

/// Audience carried by test tokens and expected by the verifier.
pub static TEST_AUDIENCE: &str = "authenticated";

/// Key id of the RSA key published by the mock key set.
pub static TEST_KEY_ID: &str = "folio-test-key-1";

/// Subject of the default test user.
pub static TEST_USER_ID: &str = "user-123";

pub static TEST_USER_EMAIL: &str = "camille@example.com";

/// Account owned by [`TEST_USER_ID`] in fixtures that need one.
pub static TEST_ACCOUNT_ID: &str = "account-1";
