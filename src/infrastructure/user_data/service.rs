//! Profile service
//!
//! Filtered lookups resolve the reference key first, so an unknown
//! department or event id surfaces as NotFound. Creation and deletion are
//! superadmin operations; edit is open to the profile's owner as well.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::DomainError;
use crate::domain::access::{Principal, policy};
use crate::domain::reference::{ReferenceKind, ReferenceRepository, resolve_or_not_found};
use crate::domain::user::UserRepository;
use crate::domain::user_data::{UserData, UserDataRepository, validate_phone};
use crate::domain::validation::FieldErrors;

/// Form payload for creating or editing a profile
#[derive(Debug, Clone, Deserialize)]
pub struct UserDataPayload {
    pub user_id: i32,
    pub department_id: i32,
    pub school_year_id: i32,
    pub country_id: i32,
    pub recruitment_event_id: i32,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Profile CRUD and filtered lookups on top of the repositories
#[derive(Debug)]
pub struct UserDataService {
    profiles: Arc<dyn UserDataRepository>,
    users: Arc<dyn UserRepository>,
    references: Arc<dyn ReferenceRepository>,
}

impl UserDataService {
    pub fn new(
        profiles: Arc<dyn UserDataRepository>,
        users: Arc<dyn UserRepository>,
        references: Arc<dyn ReferenceRepository>,
    ) -> Self {
        Self {
            profiles,
            users,
            references,
        }
    }

    pub async fn list(&self) -> Result<Vec<UserData>, DomainError> {
        self.profiles.find_all().await
    }

    /// Profiles filtered by one of the reference keys; NotFound when the
    /// reference row does not exist
    pub async fn list_by_reference(
        &self,
        kind: ReferenceKind,
        id: i32,
    ) -> Result<Vec<UserData>, DomainError> {
        resolve_or_not_found(self.references.as_ref(), kind, id).await?;

        match kind {
            ReferenceKind::RecruitmentEvent => self.profiles.find_by_recruitment_event(id).await,
            ReferenceKind::Department => self.profiles.find_by_department(id).await,
            ReferenceKind::SchoolYear => self.profiles.find_by_school_year(id).await,
            ReferenceKind::Country => self.profiles.find_by_country(id).await,
            ReferenceKind::Division => Err(DomainError::internal(
                "Profiles are not filtered by division".to_string(),
            )),
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<UserData>, DomainError> {
        self.profiles.find_by_id(id).await
    }

    /// The profile attached to an account, if any
    pub async fn get_by_user(&self, user_id: i32) -> Result<Option<UserData>, DomainError> {
        self.profiles.find_by_user(user_id).await
    }

    /// Create pipeline: bind -> validate -> authorize -> persist
    pub async fn create(
        &self,
        principal: &Principal,
        payload: UserDataPayload,
    ) -> Result<UserData, DomainError> {
        debug!(user_id = payload.user_id, "Creating profile");

        self.validate_payload(&payload).await?;

        if !policy::can_create_user_data(principal) {
            return Err(DomainError::permission_denied(
                "Not allowed to create profiles",
            ));
        }

        let user_data = UserData::new(
            payload.user_id,
            payload.department_id,
            payload.school_year_id,
            payload.country_id,
            payload.recruitment_event_id,
            payload.phone,
        )
        .map_err(|e| DomainError::internal(format!("Validated payload rejected: {}", e)))?;

        let user_data = self.profiles.create(user_data).await?;
        info!(user_data_id = user_data.id(), "Profile created");
        Ok(user_data)
    }

    /// Edit pipeline: resolve -> validate -> authorize -> persist.
    ///
    /// Ownership is checked against the stored profile id, so owners can
    /// always edit their own profile and superadmins anyone's.
    pub async fn update(
        &self,
        principal: &Principal,
        id: i32,
        payload: UserDataPayload,
    ) -> Result<UserData, DomainError> {
        debug!(user_data_id = id, "Updating profile");

        let mut user_data = self
            .profiles
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Profile {} not found", id)))?;

        self.validate_payload(&payload).await?;

        if !policy::can_edit_user_data(principal, user_data.id()) {
            return Err(DomainError::permission_denied(
                "Not allowed to edit this profile",
            ));
        }

        user_data.set_user(payload.user_id);
        user_data.set_references(
            payload.department_id,
            payload.school_year_id,
            payload.country_id,
            payload.recruitment_event_id,
        );
        user_data
            .set_phone(payload.phone)
            .map_err(|e| DomainError::internal(format!("Validated payload rejected: {}", e)))?;

        let user_data = self.profiles.update(user_data).await?;
        info!(user_data_id = user_data.id(), "Profile updated");
        Ok(user_data)
    }

    /// Delete pipeline: resolve -> authorize -> persist. A profile that
    /// still leads a team comes back as Conflict from the store.
    pub async fn delete(&self, principal: &Principal, id: i32) -> Result<(), DomainError> {
        debug!(user_data_id = id, "Deleting profile");

        self.profiles
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Profile {} not found", id)))?;

        if !policy::can_delete_user_data(principal) {
            return Err(DomainError::permission_denied(
                "Not allowed to delete profiles",
            ));
        }

        let deleted = self.profiles.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found(format!("Profile {} not found", id)));
        }

        info!(user_data_id = id, "Profile deleted");
        Ok(())
    }

    /// Field rules plus referential checks on the payload's foreign keys
    async fn validate_payload(&self, payload: &UserDataPayload) -> Result<(), DomainError> {
        let mut errors = FieldErrors::new();

        if let Some(ref phone) = payload.phone {
            if let Err(e) = validate_phone(phone) {
                errors.add("phone", e.to_string());
            }
        }

        if self.users.find_by_id(payload.user_id).await?.is_none() {
            errors.add("user", format!("User {} does not exist", payload.user_id));
        }

        let references = [
            (ReferenceKind::Department, payload.department_id, "department"),
            (ReferenceKind::SchoolYear, payload.school_year_id, "school_year"),
            (ReferenceKind::Country, payload.country_id, "country"),
            (
                ReferenceKind::RecruitmentEvent,
                payload.recruitment_event_id,
                "recruitment_event",
            ),
        ];

        for (kind, id, field) in references {
            if self.references.find(kind, id).await?.is_none() {
                errors.add(field, format!("{} {} does not exist", kind, id));
            }
        }

        errors.into_result().map_err(DomainError::validation)
    }
}
