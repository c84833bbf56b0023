//! Domain layer - entities, validation, access policy and repository traits

pub mod access;
pub mod error;
pub mod reference;
pub mod team;
pub mod user;
pub mod user_data;
pub mod validation;

pub use access::{Principal, RoleSet};
pub use error::DomainError;
pub use reference::{ReferenceEntity, ReferenceKind, ReferenceRepository};
pub use team::{Team, TeamRepository};
pub use user::{User, UserRepository};
pub use user_data::{UserData, UserDataRepository};
pub use validation::FieldErrors;
