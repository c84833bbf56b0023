//! User account field validation

use thiserror::Error;

pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("This value should not be blank")]
    Blank,

    #[error("This value is too long")]
    TooLong,

    #[error("This value is not a valid email address")]
    InvalidEmail,

    #[error("This value may only contain lowercase letters, digits, dots, dashes and underscores")]
    InvalidUsername,

    #[error("This value is not a valid role name")]
    InvalidRole,
}

/// Usernames: 1-50 chars, lowercase alphanumeric plus `.`, `-`, `_`
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::Blank);
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(UserValidationError::TooLong);
    }

    let valid = username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_'));

    if !valid {
        return Err(UserValidationError::InvalidUsername);
    }

    Ok(())
}

/// Minimal structural email check: one `@` with non-empty local part and a
/// domain containing a dot
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::Blank);
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// First/last names: non-blank, bounded length
pub fn validate_person_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::Blank);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::TooLong);
    }

    Ok(())
}

/// Role grants follow the `ROLE_UPPER_SNAKE` convention
pub fn validate_role(role: &str) -> Result<(), UserValidationError> {
    let rest = role
        .strip_prefix("ROLE_")
        .ok_or(UserValidationError::InvalidRole)?;

    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
        return Err(UserValidationError::InvalidRole);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("jdupont").is_ok());
        assert!(validate_username("j.dupont-2").is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(validate_username("").is_err());
        assert!(validate_username("JDupont").is_err());
        assert!(validate_username("j dupont").is_err());
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("j.dupont@example.org").is_ok());
        assert!(validate_email("a@b.co").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(UserValidationError::Blank));
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.org").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@trailing.").is_err());
    }

    #[test]
    fn test_person_name() {
        assert!(validate_person_name("Jean").is_ok());
        assert!(validate_person_name("  ").is_err());
        assert!(validate_person_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_valid_roles() {
        assert!(validate_role("ROLE_RH_ADMIN").is_ok());
        assert!(validate_role("ROLE_RH_SUPERADMIN").is_ok());
        assert!(validate_role("ROLE_USER").is_ok());
    }

    #[test]
    fn test_invalid_roles() {
        assert!(validate_role("RH_ADMIN").is_err());
        assert!(validate_role("ROLE_").is_err());
        assert!(validate_role("ROLE_rh_admin").is_err());
        assert!(validate_role("role_rh_admin").is_err());
    }
}
