//! User account endpoints
//!
//! Mutations require authentication but no specific role, matching the
//! access rules of the system this API replaces.

use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Serialize;

use crate::api::middleware::RequirePrincipal;
use crate::api::state::AppState;
use crate::api::types::{ApiError, DeletedResponse, Json};
use crate::domain::user::User;
use crate::infrastructure::user::UserPayload;

/// Create the user router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// User representation on the wire
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl UserDto {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            roles: user.roles().to_sorted_vec(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserDto,
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.user_service.list().await?;

    Ok(Json(UsersResponse {
        users: users.iter().map(UserDto::from_user).collect(),
    }))
}

/// GET /user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    Ok(Json(UserResponse {
        user: UserDto::from_user(&user),
    }))
}

/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    _principal: RequirePrincipal,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.create(payload).await?;

    Ok(Json(UserResponse {
        user: UserDto::from_user(&user),
    }))
}

/// PUT /user/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _principal: RequirePrincipal,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.update(id, payload).await?;

    Ok(Json(UserResponse {
        user: UserDto::from_user(&user),
    }))
}

/// DELETE /user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _principal: RequirePrincipal,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.user_service.delete(id).await?;

    Ok(Json(DeletedResponse::new()))
}
