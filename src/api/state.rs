//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::TokenService;
use crate::infrastructure::team::TeamService;
use crate::infrastructure::user::UserService;
use crate::infrastructure::user_data::UserDataService;

/// Shared services handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub team_service: Arc<TeamService>,
    pub user_data_service: Arc<UserDataService>,
    pub jwt_service: Arc<dyn TokenService>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        team_service: Arc<TeamService>,
        user_data_service: Arc<UserDataService>,
        jwt_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_service,
            team_service,
            user_data_service,
            jwt_service,
        }
    }
}
