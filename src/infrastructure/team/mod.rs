//! Team infrastructure

mod postgres_repository;
mod service;

pub use postgres_repository::PostgresTeamRepository;
pub use service::{TeamPayload, TeamService};
