//! User account entity

use chrono::{DateTime, Utc};

use super::validation::{
    UserValidationError, validate_email, validate_person_name, validate_username,
};
use crate::domain::access::RoleSet;

/// A user account; the acting principal behind requests
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database id; 0 until first persisted
    id: i32,
    /// Login name, unique across accounts
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    /// Role grants; empty for regular members
    roles: RoleSet,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not yet persisted account
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        roles: RoleSet,
    ) -> Result<Self, UserValidationError> {
        let username = username.into();
        let email = email.into();
        let first_name = first_name.into();
        let last_name = last_name.into();

        validate_username(&username)?;
        validate_email(&email)?;
        validate_person_name(&first_name)?;
        validate_person_name(&last_name)?;

        let now = Utc::now();

        Ok(Self {
            id: 0,
            username,
            email,
            first_name,
            last_name,
            roles,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a persisted account from storage
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: i32,
        username: String,
        email: String,
        first_name: String,
        last_name: String,
        roles: RoleSet,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            first_name,
            last_name,
            roles,
            created_at,
            updated_at,
        }
    }

    /// Attach the id assigned on insert
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    // Getters

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    // Mutators

    pub fn set_username(&mut self, username: impl Into<String>) -> Result<(), UserValidationError> {
        let username = username.into();
        validate_username(&username)?;
        self.username = username;
        self.touch();
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), UserValidationError> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        self.touch();
        Ok(())
    }

    pub fn set_names(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<(), UserValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        validate_person_name(&first_name)?;
        validate_person_name(&last_name)?;
        self.first_name = first_name;
        self.last_name = last_name;
        self.touch();
        Ok(())
    }

    pub fn set_roles(&mut self, roles: RoleSet) {
        self.roles = roles;
        self.touch();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
