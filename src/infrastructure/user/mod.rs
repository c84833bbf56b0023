//! User account infrastructure

mod postgres_repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub(crate) use postgres_repository::map_unique_violation;
pub use service::{UserPayload, UserService};
