//! Member profile entity

use chrono::{DateTime, Utc};

use super::validation::{UserDataValidationError, validate_phone};

/// Extended member attributes attached to exactly one user account
#[derive(Debug, Clone, PartialEq)]
pub struct UserData {
    /// Database id; 0 until first persisted
    id: i32,
    /// Owning account; one profile per account
    user_id: i32,
    department_id: i32,
    school_year_id: i32,
    country_id: i32,
    recruitment_event_id: i32,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserData {
    /// Create a new, not yet persisted profile
    pub fn new(
        user_id: i32,
        department_id: i32,
        school_year_id: i32,
        country_id: i32,
        recruitment_event_id: i32,
        phone: Option<String>,
    ) -> Result<Self, UserDataValidationError> {
        if let Some(ref phone) = phone {
            validate_phone(phone)?;
        }

        let now = Utc::now();

        Ok(Self {
            id: 0,
            user_id,
            department_id,
            school_year_id,
            country_id,
            recruitment_event_id,
            phone,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a persisted profile from storage
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: i32,
        user_id: i32,
        department_id: i32,
        school_year_id: i32,
        country_id: i32,
        recruitment_event_id: i32,
        phone: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            department_id,
            school_year_id,
            country_id,
            recruitment_event_id,
            phone,
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

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn department_id(&self) -> i32 {
        self.department_id
    }

    pub fn school_year_id(&self) -> i32 {
        self.school_year_id
    }

    pub fn country_id(&self) -> i32 {
        self.country_id
    }

    pub fn recruitment_event_id(&self) -> i32 {
        self.recruitment_event_id
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    pub fn set_user(&mut self, user_id: i32) {
        self.user_id = user_id;
        self.touch();
    }

    pub fn set_references(
        &mut self,
        department_id: i32,
        school_year_id: i32,
        country_id: i32,
        recruitment_event_id: i32,
    ) {
        self.department_id = department_id;
        self.school_year_id = school_year_id;
        self.country_id = country_id;
        self.recruitment_event_id = recruitment_event_id;
        self.touch();
    }

    pub fn set_phone(&mut self, phone: Option<String>) -> Result<(), UserDataValidationError> {
        if let Some(ref phone) = phone {
            validate_phone(phone)?;
        }
        self.phone = phone;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
