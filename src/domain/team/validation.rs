//! Team field validation

use thiserror::Error;

pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamValidationError {
    #[error("This value should not be blank")]
    NameBlank,

    #[error("This value is too long. It should have {MAX_NAME_LENGTH} characters or less")]
    NameTooLong,
}

/// Validate a team display name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::NameBlank);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong);
    }

    Ok(())
}
