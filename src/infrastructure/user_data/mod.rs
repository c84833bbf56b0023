//! Member profile infrastructure

mod postgres_repository;
mod service;

pub use postgres_repository::PostgresUserDataRepository;
pub use service::{UserDataPayload, UserDataService};
