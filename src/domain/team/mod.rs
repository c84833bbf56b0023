//! Team entity, validation and repository

mod entity;
mod repository;
mod validation;

pub use entity::Team;
pub use repository::TeamRepository;
pub use validation::{TeamValidationError, validate_team_name};

#[cfg(test)]
pub use repository::mock::MockTeamRepository;
