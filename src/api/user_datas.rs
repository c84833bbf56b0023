//! Member profile endpoints

use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Serialize;

use crate::api::middleware::RequirePrincipal;
use crate::api::state::AppState;
use crate::api::types::{ApiError, DeletedResponse, Json};
use crate::domain::reference::ReferenceKind;
use crate::domain::user_data::UserData;
use crate::infrastructure::user_data::UserDataPayload;

/// Create the profile router
pub fn create_user_datas_router() -> Router<AppState> {
    Router::new()
        .route("/user_datas", get(list_user_datas))
        .route(
            "/user_datas/recruitment/{id}",
            get(list_user_datas_by_recruitment),
        )
        .route(
            "/user_datas/department/{id}",
            get(list_user_datas_by_department),
        )
        .route("/user_datas/year/{id}", get(list_user_datas_by_year))
        .route("/user_datas/country/{id}", get(list_user_datas_by_country))
        .route("/user_data", post(create_user_data))
        .route(
            "/user_data/{id}",
            get(get_user_data)
                .put(update_user_data)
                .delete(delete_user_data),
        )
}

/// Profile representation on the wire
#[derive(Debug, Serialize)]
pub struct UserDataDto {
    pub id: i32,
    pub user_id: i32,
    pub department_id: i32,
    pub school_year_id: i32,
    pub country_id: i32,
    pub recruitment_event_id: i32,
    pub phone: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl UserDataDto {
    fn from_user_data(user_data: &UserData) -> Self {
        Self {
            id: user_data.id(),
            user_id: user_data.user_id(),
            department_id: user_data.department_id(),
            school_year_id: user_data.school_year_id(),
            country_id: user_data.country_id(),
            recruitment_event_id: user_data.recruitment_event_id(),
            phone: user_data.phone().map(str::to_string),
            created_at: user_data.created_at().to_rfc3339(),
            updated_at: user_data.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDatasResponse {
    pub user_datas: Vec<UserDataDto>,
}

#[derive(Debug, Serialize)]
pub struct UserDataResponse {
    pub user_data: UserDataDto,
}

fn user_datas_response(profiles: Vec<UserData>) -> Json<UserDatasResponse> {
    Json(UserDatasResponse {
        user_datas: profiles.iter().map(UserDataDto::from_user_data).collect(),
    })
}

/// GET /user_datas
pub async fn list_user_datas(
    State(state): State<AppState>,
) -> Result<Json<UserDatasResponse>, ApiError> {
    Ok(user_datas_response(state.user_data_service.list().await?))
}

/// GET /user_datas/recruitment/{id}
pub async fn list_user_datas_by_recruitment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDatasResponse>, ApiError> {
    let profiles = state
        .user_data_service
        .list_by_reference(ReferenceKind::RecruitmentEvent, id)
        .await?;
    Ok(user_datas_response(profiles))
}

/// GET /user_datas/department/{id}
pub async fn list_user_datas_by_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDatasResponse>, ApiError> {
    let profiles = state
        .user_data_service
        .list_by_reference(ReferenceKind::Department, id)
        .await?;
    Ok(user_datas_response(profiles))
}

/// GET /user_datas/year/{id}
pub async fn list_user_datas_by_year(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDatasResponse>, ApiError> {
    let profiles = state
        .user_data_service
        .list_by_reference(ReferenceKind::SchoolYear, id)
        .await?;
    Ok(user_datas_response(profiles))
}

/// GET /user_datas/country/{id}
pub async fn list_user_datas_by_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDatasResponse>, ApiError> {
    let profiles = state
        .user_data_service
        .list_by_reference(ReferenceKind::Country, id)
        .await?;
    Ok(user_datas_response(profiles))
}

/// GET /user_data/{id}
pub async fn get_user_data(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDataResponse>, ApiError> {
    let user_data = state
        .user_data_service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Profile {} not found", id)))?;

    Ok(Json(UserDataResponse {
        user_data: UserDataDto::from_user_data(&user_data),
    }))
}

/// POST /user_data
pub async fn create_user_data(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(payload): Json<UserDataPayload>,
) -> Result<Json<UserDataResponse>, ApiError> {
    let user_data = state.user_data_service.create(&principal, payload).await?;

    Ok(Json(UserDataResponse {
        user_data: UserDataDto::from_user_data(&user_data),
    }))
}

/// PUT /user_data/{id}
pub async fn update_user_data(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(payload): Json<UserDataPayload>,
) -> Result<Json<UserDataResponse>, ApiError> {
    let user_data = state
        .user_data_service
        .update(&principal, id, payload)
        .await?;

    Ok(Json(UserDataResponse {
        user_data: UserDataDto::from_user_data(&user_data),
    }))
}

/// DELETE /user_data/{id}
pub async fn delete_user_data(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    RequirePrincipal(principal): RequirePrincipal,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.user_data_service.delete(&principal, id).await?;

    Ok(Json(DeletedResponse::new()))
}
