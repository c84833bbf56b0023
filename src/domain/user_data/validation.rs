//! Profile field validation

use thiserror::Error;

pub const MAX_PHONE_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserDataValidationError {
    #[error("This value is not a valid phone number")]
    InvalidPhone,

    #[error("This value is too long. It should have {MAX_PHONE_LENGTH} characters or less")]
    PhoneTooLong,
}

/// Phone numbers: digits with optional leading `+`, spaces, dots and dashes
pub fn validate_phone(phone: &str) -> Result<(), UserDataValidationError> {
    if phone.chars().count() > MAX_PHONE_LENGTH {
        return Err(UserDataValidationError::PhoneTooLong);
    }

    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let mut has_digit = false;

    for c in rest.chars() {
        match c {
            '0'..='9' => has_digit = true,
            ' ' | '.' | '-' => {}
            _ => return Err(UserDataValidationError::InvalidPhone),
        }
    }

    if !has_digit {
        return Err(UserDataValidationError::InvalidPhone);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(validate_phone("0612345678").is_ok());
        assert!(validate_phone("+33 6 12 34 56 78").is_ok());
        assert!(validate_phone("06.12.34.56.78").is_ok());
        assert!(validate_phone("06-12-34-56-78").is_ok());
    }

    #[test]
    fn test_invalid_phones() {
        assert!(validate_phone("").is_err());
        assert!(validate_phone("+").is_err());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("06(12)34").is_err());
    }

    #[test]
    fn test_phone_too_long() {
        let phone = "1".repeat(MAX_PHONE_LENGTH + 1);
        assert_eq!(
            validate_phone(&phone),
            Err(UserDataValidationError::PhoneTooLong)
        );
    }
}
