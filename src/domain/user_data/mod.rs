//! Member profile (user data) entity, validation and repository

mod entity;
mod repository;
mod validation;

pub use entity::UserData;
pub use repository::UserDataRepository;
pub use validation::{UserDataValidationError, validate_phone};

#[cfg(test)]
pub use repository::mock::MockUserDataRepository;
