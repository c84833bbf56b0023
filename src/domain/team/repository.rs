//! Team repository trait

use async_trait::async_trait;

use super::entity::Team;
use crate::domain::DomainError;

/// Repository for team persistence and scoped lookups
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// All teams
    async fn find_all(&self) -> Result<Vec<Team>, DomainError>;

    /// Teams belonging to a division
    async fn find_by_division(&self, division_id: i32) -> Result<Vec<Team>, DomainError>;

    /// Teams whose leader is the given profile
    async fn find_by_leader(&self, user_data_id: i32) -> Result<Vec<Team>, DomainError>;

    /// Teams whose member collection contains the given profile.
    ///
    /// Goes through the membership relation; a profile that only leads a team
    /// does not appear here.
    async fn find_with_member(&self, user_data_id: i32) -> Result<Vec<Team>, DomainError>;

    /// One team by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DomainError>;

    /// One team by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DomainError>;

    /// Insert a new team, returning it with its assigned id
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Replace a persisted team
    async fn update(&self, team: Team) -> Result<Team, DomainError>;

    /// Delete by id; false when no such team existed
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
