//! Email validation and normalization.
//!
//! Emails double as login names. Normalization lower-cases the domain part
//! only; the local part is preserved as typed. Uniqueness checks use the
//! fully lower-cased address as the index key, so two addresses differing
//! only in case cannot both register.

use crate::error::{AuthError, AuthResult};

/// Validates an email address and returns it normalized.
///
/// Rules: non-empty, exactly one `@`, non-empty local and domain parts.
/// The domain part is lower-cased; the local part is left as-is.
pub fn normalize_email(email: &str) -> AuthResult<String> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::InvalidEmail("email must not be empty".to_string()));
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(AuthError::InvalidEmail(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    Ok(format!("{}@{}", local, domain.to_lowercase()))
}

/// The key under which an email is stored in the uniqueness index.
///
/// Fully lower-cased so lookups compare case-insensitively.
pub fn email_index_key(normalized_email: &str) -> String {
    normalized_email.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_is_lowercased() {
        assert_eq!(normalize_email("test@TEST.com").unwrap(), "test@test.com");
    }

    #[test]
    fn test_local_part_is_preserved() {
        assert_eq!(normalize_email("Alice@Example.COM").unwrap(), "Alice@example.com");
    }

    #[test]
    fn test_empty_email_rejected() {
        assert!(matches!(normalize_email(""), Err(AuthError::InvalidEmail(_))));
        assert!(matches!(normalize_email("   "), Err(AuthError::InvalidEmail(_))));
    }

    #[test]
    fn test_missing_parts_rejected() {
        assert!(normalize_email("no-at-sign").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("user@").is_err());
        assert!(normalize_email("a@b@c").is_err());
    }

    #[test]
    fn test_index_key_is_case_insensitive() {
        let a = email_index_key(&normalize_email("Alice@TEST.com").unwrap());
        let b = email_index_key(&normalize_email("alice@test.COM").unwrap());
        assert_eq!(a, b);
    }
}
