//! User account service
//!
//! User mutations carry no role or ownership predicate beyond authentication;
//! this mirrors the system this API replaces and is deliberate (see DESIGN.md).

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::DomainError;
use crate::domain::access::RoleSet;
use crate::domain::user::{
    User, UserRepository, validate_email, validate_person_name, validate_role, validate_username,
};
use crate::domain::validation::FieldErrors;

/// Form payload for creating or editing an account
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Account CRUD on top of the repository
#[derive(Debug)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<User>, DomainError> {
        self.repository.find_by_id(id).await
    }

    /// Create pipeline: bind -> validate -> persist (no authorization predicate)
    pub async fn create(&self, payload: UserPayload) -> Result<User, DomainError> {
        debug!(username = %payload.username, "Creating user");

        validate_payload(&payload).map_err(DomainError::validation)?;

        let user = User::new(
            &payload.username,
            &payload.email,
            &payload.first_name,
            &payload.last_name,
            RoleSet::from_strings(payload.roles),
        )
        .map_err(|e| {
            let mut errors = FieldErrors::new();
            errors.add("username", e.to_string());
            DomainError::validation(errors)
        })?;

        let user = self.repository.create(user).await?;
        info!(user_id = user.id(), "User created");
        Ok(user)
    }

    /// Edit pipeline: resolve -> validate -> persist
    pub async fn update(&self, id: i32, payload: UserPayload) -> Result<User, DomainError> {
        debug!(user_id = id, "Updating user");

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User {} not found", id)))?;

        validate_payload(&payload).map_err(DomainError::validation)?;

        // Mutators re-run the field rules; the payload already passed them
        user.set_username(&payload.username)
            .and_then(|_| user.set_email(&payload.email))
            .and_then(|_| user.set_names(&payload.first_name, &payload.last_name))
            .map_err(|e| DomainError::internal(format!("Validated payload rejected: {}", e)))?;
        user.set_roles(RoleSet::from_strings(payload.roles));

        let user = self.repository.update(user).await?;
        info!(user_id = user.id(), "User updated");
        Ok(user)
    }

    /// Delete pipeline: resolve -> persist
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        debug!(user_id = id, "Deleting user");

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found(format!("User {} not found", id)));
        }

        info!(user_id = id, "User deleted");
        Ok(())
    }
}

fn validate_payload(payload: &UserPayload) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Err(e) = validate_username(&payload.username) {
        errors.add("username", e.to_string());
    }
    if let Err(e) = validate_email(&payload.email) {
        errors.add("email", e.to_string());
    }
    if let Err(e) = validate_person_name(&payload.first_name) {
        errors.add("first_name", e.to_string());
    }
    if let Err(e) = validate_person_name(&payload.last_name) {
        errors.add("last_name", e.to_string());
    }
    for role in &payload.roles {
        if let Err(e) = validate_role(role) {
            errors.add("roles", format!("'{}': {}", role, e));
        }
    }

    errors.into_result()
}
