//! User account entity, validation and repository

mod entity;
mod repository;
mod validation;

pub use entity::User;
pub use repository::UserRepository;
pub use validation::{
    UserValidationError, validate_email, validate_person_name, validate_role, validate_username,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
