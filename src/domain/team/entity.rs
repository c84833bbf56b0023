//! Team entity

use chrono::{DateTime, Utc};

use super::validation::{TeamValidationError, validate_team_name};

/// A team: one leader, one division, any number of member profiles
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    /// Database id; 0 until first persisted
    id: i32,
    /// Display name, unique across teams
    name: String,
    /// Division the team belongs to
    division_id: i32,
    /// Profile id of the team leader
    leader_id: i32,
    /// Profile ids of the members, deduplicated and sorted
    member_ids: Vec<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new, not yet persisted team
    pub fn new(
        name: impl Into<String>,
        division_id: i32,
        leader_id: i32,
        member_ids: Vec<i32>,
    ) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id: 0,
            name,
            division_id,
            leader_id,
            member_ids: normalize_members(member_ids),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a persisted team from storage
    pub fn from_parts(
        id: i32,
        name: String,
        division_id: i32,
        leader_id: i32,
        member_ids: Vec<i32>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            division_id,
            leader_id,
            member_ids: normalize_members(member_ids),
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

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn division_id(&self) -> i32 {
        self.division_id
    }

    pub fn leader_id(&self) -> i32 {
        self.leader_id
    }

    pub fn member_ids(&self) -> &[i32] {
        &self.member_ids
    }

    pub fn has_member(&self, user_data_id: i32) -> bool {
        self.member_ids.binary_search(&user_data_id).is_ok()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    pub fn set_division(&mut self, division_id: i32) {
        self.division_id = division_id;
        self.touch();
    }

    pub fn set_leader(&mut self, leader_id: i32) {
        self.leader_id = leader_id;
        self.touch();
    }

    pub fn set_members(&mut self, member_ids: Vec<i32>) {
        self.member_ids = normalize_members(member_ids);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn normalize_members(mut member_ids: Vec<i32>) -> Vec<i32> {
    member_ids.sort_unstable();
    member_ids.dedup();
    member_ids
}
