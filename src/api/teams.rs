//! Team endpoints
//!
//! `/team/{key}` serves both the by-id and by-name fetch: a key that parses
//! as an integer is treated as an id, anything else as a name. Mutating
//! routes only accept numeric keys.

use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Serialize;

use crate::api::middleware::RequirePrincipal;
use crate::api::state::AppState;
use crate::api::types::{ApiError, DeletedResponse, Json};
use crate::domain::team::Team;
use crate::infrastructure::team::TeamPayload;

/// Create the team router
pub fn create_teams_router() -> Router<AppState> {
    Router::new()
        .route("/teams", get(list_teams))
        .route("/teams/division/{id}", get(list_teams_by_division))
        .route("/teams/leader/{id}", get(list_teams_by_leader))
        .route("/teams/member/{id}", get(list_teams_by_member))
        .route("/team", post(create_team))
        .route(
            "/team/{key}",
            get(get_team).put(update_team).delete(delete_team),
        )
}

/// Team representation on the wire
#[derive(Debug, Serialize)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub division_id: i32,
    pub leader_id: i32,
    pub member_ids: Vec<i32>,
    pub created_at: String,
    pub updated_at: String,
}

impl TeamDto {
    fn from_team(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            division_id: team.division_id(),
            leader_id: team.leader_id(),
            member_ids: team.member_ids().to_vec(),
            created_at: team.created_at().to_rfc3339(),
            updated_at: team.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub teams: Vec<TeamDto>,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: TeamDto,
}

fn teams_response(teams: Vec<Team>) -> Json<TeamsResponse> {
    Json(TeamsResponse {
        teams: teams.iter().map(TeamDto::from_team).collect(),
    })
}

/// GET /teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<TeamsResponse>, ApiError> {
    Ok(teams_response(state.team_service.list().await?))
}

/// GET /teams/division/{id}
pub async fn list_teams_by_division(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TeamsResponse>, ApiError> {
    Ok(teams_response(state.team_service.list_by_division(id).await?))
}

/// GET /teams/leader/{id}
pub async fn list_teams_by_leader(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TeamsResponse>, ApiError> {
    Ok(teams_response(state.team_service.list_by_leader(id).await?))
}

/// GET /teams/member/{id}
pub async fn list_teams_by_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TeamsResponse>, ApiError> {
    Ok(teams_response(state.team_service.list_by_member(id).await?))
}

/// GET /team/{key} — by id when the key is numeric, by name otherwise
pub async fn get_team(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = match key.parse::<i32>() {
        Ok(id) => state.team_service.get(id).await?,
        Err(_) => state.team_service.get_by_name(&key).await?,
    };

    let team = team.ok_or_else(|| ApiError::not_found(format!("Team {} not found", key)))?;

    Ok(Json(TeamResponse {
        team: TeamDto::from_team(&team),
    }))
}

/// POST /team
pub async fn create_team(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(payload): Json<TeamPayload>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.team_service.create(&principal, payload).await?;

    Ok(Json(TeamResponse {
        team: TeamDto::from_team(&team),
    }))
}

/// PUT /team/{id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(key): Path<String>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(payload): Json<TeamPayload>,
) -> Result<Json<TeamResponse>, ApiError> {
    let id = numeric_key(&key)?;
    let team = state.team_service.update(&principal, id, payload).await?;

    Ok(Json(TeamResponse {
        team: TeamDto::from_team(&team),
    }))
}

/// DELETE /team/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(key): Path<String>,
    RequirePrincipal(principal): RequirePrincipal,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = numeric_key(&key)?;
    state.team_service.delete(&principal, id).await?;

    Ok(Json(DeletedResponse::new()))
}

// Mutations never resolve by name; a non-numeric key matches no team
fn numeric_key(key: &str) -> Result<i32, ApiError> {
    key.parse::<i32>()
        .map_err(|_| ApiError::not_found(format!("Team {} not found", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::sync::Arc;

    use crate::domain::access::{Principal, ROLE_RH_ADMIN, RoleSet};
    use crate::domain::reference::{MockReferenceRepository, ReferenceEntity};
    use crate::domain::team::MockTeamRepository;
    use crate::domain::user::MockUserRepository;
    use crate::domain::user_data::{MockUserDataRepository, UserData};
    use crate::infrastructure::auth::{JwtConfig, JwtService};
    use crate::infrastructure::team::TeamService;
    use crate::infrastructure::user::UserService;
    use crate::infrastructure::user_data::UserDataService;

    fn state() -> (Arc<MockTeamRepository>, Arc<MockUserDataRepository>, AppState) {
        let teams = Arc::new(MockTeamRepository::new());
        let profiles = Arc::new(MockUserDataRepository::new());
        let users = Arc::new(MockUserRepository::new());

        let mut references = MockReferenceRepository::new();
        references.expect_find().returning(|kind, id| {
            Ok(Some(ReferenceEntity {
                kind,
                id,
                name: "Reference".to_string(),
            }))
        });
        let references = Arc::new(references);

        let state = AppState::new(
            Arc::new(UserService::new(users.clone())),
            Arc::new(TeamService::new(
                teams.clone(),
                profiles.clone(),
                references.clone(),
            )),
            Arc::new(UserDataService::new(profiles.clone(), users, references)),
            Arc::new(JwtService::new(JwtConfig::default())),
        );

        (teams, profiles, state)
    }

    fn admin() -> RequirePrincipal {
        RequirePrincipal(Principal::new(
            1,
            Some(1),
            RoleSet::from_strings(vec![ROLE_RH_ADMIN.to_string()]),
        ))
    }

    fn seed_team(
        teams: &MockTeamRepository,
        profiles: &MockUserDataRepository,
        name: &str,
    ) -> Team {
        let leader = profiles.seed(UserData::new(1, 1, 1, 1, 1, None).unwrap());
        teams.seed(Team::new(name, 1, leader.id(), vec![]).unwrap())
    }

    #[tokio::test]
    async fn test_get_team_by_numeric_key() {
        let (teams, profiles, state) = state();
        let team = seed_team(&teams, &profiles, "Marketing");

        let response = get_team(State(state), Path(team.id().to_string()))
            .await
            .unwrap();

        assert_eq!(response.team.name, "Marketing");
    }

    #[tokio::test]
    async fn test_get_team_by_name_key() {
        let (teams, profiles, state) = state();
        seed_team(&teams, &profiles, "Marketing");

        let response = get_team(State(state), Path("Marketing".to_string()))
            .await
            .unwrap();

        assert_eq!(response.team.name, "Marketing");
    }

    #[tokio::test]
    async fn test_get_unknown_team_is_not_found() {
        let (_, _, state) = state();

        let err = get_team(State(state), Path("99".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_team() {
        let (_, profiles, state) = state();
        let leader = profiles.seed(UserData::new(1, 1, 1, 1, 1, None).unwrap());

        let response = create_team(
            State(state),
            admin(),
            Json(TeamPayload {
                name: "Marketing".to_string(),
                division_id: 1,
                leader_id: leader.id(),
                member_ids: vec![],
            }),
        )
        .await
        .unwrap();

        assert!(response.team.id > 0);
        assert_eq!(response.team.name, "Marketing");
    }

    #[tokio::test]
    async fn test_delete_with_name_key_is_not_found() {
        let (teams, profiles, state) = state();
        seed_team(&teams, &profiles, "Marketing");

        let err = delete_team(State(state), Path("Marketing".to_string()), admin())
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_team() {
        let (teams, profiles, state) = state();
        let team = seed_team(&teams, &profiles, "Marketing");

        let response = delete_team(State(state), Path(team.id().to_string()), admin())
            .await
            .unwrap();

        assert_eq!(response.status, "Deleted");
    }
}
