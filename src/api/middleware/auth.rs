//! JWT authentication middleware

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::access::Principal;

/// Extractor that requires a valid JWT token and resolves the acting
/// principal: the account, its profile id (if any) and its role grants.
///
/// Extracts the token from the Authorization header: `Bearer <jwt_token>`.
#[derive(Debug, Clone)]
pub struct RequirePrincipal(pub Principal);

impl FromRequestParts<AppState> for RequirePrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_jwt_token(&parts.headers)?;

        debug!("Validating JWT token");

        let claims = state
            .jwt_service
            .validate(&token)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        let user_id = claims
            .user_id()
            .map_err(|e| ApiError::unauthorized(e.to_string()))?;

        let user = state
            .user_service
            .get(user_id)
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?
            .ok_or_else(|| ApiError::unauthorized("User not found"))?;

        let profile = state
            .user_data_service
            .get_by_user(user.id())
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?;

        Ok(RequirePrincipal(Principal::new(
            user.id(),
            profile.map(|p| p.id()),
            user.roles().clone(),
        )))
    }
}

/// Extract a JWT token from the Authorization header
pub fn extract_jwt_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    Err(ApiError::unauthorized(
        "Authentication required. Provide a token via 'Authorization: Bearer <token>' header",
    ))
}
