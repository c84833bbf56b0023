use thiserror::Error;

use super::validation::FieldErrors;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation failed")]
    Validation { errors: FieldErrors },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error must stop a mutation before any write is attempted
    pub fn is_terminal_before_persist(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Validation { .. } | Self::PermissionDenied { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Team 42 not found");
        assert_eq!(error.to_string(), "Not found: Team 42 not found");
    }

    #[test]
    fn test_permission_denied_error() {
        let error = DomainError::permission_denied("not the team leader");
        assert_eq!(error.to_string(), "Permission denied: not the team leader");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("team name already taken");
        assert_eq!(error.to_string(), "Conflict: team name already taken");
    }

    #[test]
    fn test_terminal_before_persist() {
        let mut errors = FieldErrors::new();
        errors.add("name", "This value should not be blank");

        assert!(DomainError::not_found("x").is_terminal_before_persist());
        assert!(DomainError::validation(errors).is_terminal_before_persist());
        assert!(DomainError::permission_denied("x").is_terminal_before_persist());
        assert!(!DomainError::storage("x").is_terminal_before_persist());
    }
}
