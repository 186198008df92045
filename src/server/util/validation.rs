//! Field checks for request bodies.

use crate::server::{
    error::validation::ValidationError,
    util::slug::is_valid_slug,
};

/// Rejects empty or whitespace-only values.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(())
}

/// Requires a `local@domain.tld` shaped address without whitespace.
pub fn require_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };

    let domain_ok = domain
        .split('.')
        .filter(|label| !label.is_empty())
        .count()
        >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..");

    if local.is_empty() || !domain_ok || value.chars().any(char::is_whitespace) || domain.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Requires a non-empty, well-formed slug.
pub fn require_slug(value: &str) -> Result<(), ValidationError> {
    require_non_empty("slug", value)?;

    if !is_valid_slug(value) {
        return Err(ValidationError::InvalidSlug(value.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            require_non_empty("title", "   "),
            Err(ValidationError::EmptyField("title"))
        );
        assert!(require_non_empty("title", "Galerie").is_ok());
    }

    #[test]
    fn checks_email_shape() {
        assert!(require_email("camille@example.com").is_ok());
        assert!(require_email("camille.dupont@studio.example.fr").is_ok());
        assert_eq!(require_email("camille"), Err(ValidationError::InvalidEmail));
        assert_eq!(require_email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(require_email("camille@localhost"), Err(ValidationError::InvalidEmail));
        assert_eq!(require_email("cam ille@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(require_email("a@b@example.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn checks_slug_shape() {
        assert!(require_slug("galerie").is_ok());
        assert_eq!(require_slug(""), Err(ValidationError::EmptyField("slug")));
        assert!(matches!(require_slug("Galerie"), Err(ValidationError::InvalidSlug(_))));
    }
}
