//! HR back office API
//!
//! REST CRUD over user accounts, member profiles and teams, with
//! role/ownership based authorization on mutating operations.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::db;
use infrastructure::reference::PostgresReferenceRepository;
use infrastructure::team::{PostgresTeamRepository, TeamService};
use infrastructure::user::{PostgresUserRepository, UserService};
use infrastructure::user_data::{PostgresUserDataRepository, UserDataService};
use tracing::info;

/// Create the application state with all services wired to PostgreSQL
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Connecting to PostgreSQL...");
    let pool = db::connect_pool(&config.database).await?;
    info!("PostgreSQL connection established");

    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let user_data_repository = Arc::new(PostgresUserDataRepository::new(pool.clone()));
    let team_repository = Arc::new(PostgresTeamRepository::new(pool.clone()));
    let reference_repository = Arc::new(PostgresReferenceRepository::new(pool));

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let team_service = Arc::new(TeamService::new(
        team_repository,
        user_data_repository.clone(),
        reference_repository.clone(),
    ));
    let user_data_service = Arc::new(UserDataService::new(
        user_data_repository,
        user_repository,
        reference_repository,
    ));

    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    )));

    Ok(AppState::new(
        user_service,
        team_service,
        user_data_service,
        jwt_service,
    ))
}
