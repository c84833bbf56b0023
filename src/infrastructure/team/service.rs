//! Team service
//!
//! Scoped lookups resolve their filter key first, so an unknown division or
//! profile id surfaces as NotFound rather than an empty list. Mutations run
//! the bind -> validate -> authorize -> persist pipeline; a failed predicate
//! aborts before any write.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::DomainError;
use crate::domain::access::{Principal, policy};
use crate::domain::reference::{ReferenceKind, ReferenceRepository, resolve_or_not_found};
use crate::domain::team::{Team, TeamRepository, validate_team_name};
use crate::domain::user_data::UserDataRepository;
use crate::domain::validation::FieldErrors;

/// Form payload for creating or editing a team
#[derive(Debug, Clone, Deserialize)]
pub struct TeamPayload {
    pub name: String,
    pub division_id: i32,
    pub leader_id: i32,
    #[serde(default)]
    pub member_ids: Vec<i32>,
}

/// Team CRUD and scoped lookups on top of the repositories
#[derive(Debug)]
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    profiles: Arc<dyn UserDataRepository>,
    references: Arc<dyn ReferenceRepository>,
}

impl TeamService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        profiles: Arc<dyn UserDataRepository>,
        references: Arc<dyn ReferenceRepository>,
    ) -> Self {
        Self {
            teams,
            profiles,
            references,
        }
    }

    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        self.teams.find_all().await
    }

    /// Teams in a division; NotFound when the division does not exist
    pub async fn list_by_division(&self, division_id: i32) -> Result<Vec<Team>, DomainError> {
        resolve_or_not_found(
            self.references.as_ref(),
            ReferenceKind::Division,
            division_id,
        )
        .await?;
        self.teams.find_by_division(division_id).await
    }

    /// Teams led by a profile; NotFound when the profile does not exist
    pub async fn list_by_leader(&self, user_data_id: i32) -> Result<Vec<Team>, DomainError> {
        self.resolve_profile(user_data_id).await?;
        self.teams.find_by_leader(user_data_id).await
    }

    /// Teams a profile belongs to as a member. Leading a team does not make
    /// the profile a member of it.
    pub async fn list_by_member(&self, user_data_id: i32) -> Result<Vec<Team>, DomainError> {
        self.resolve_profile(user_data_id).await?;
        self.teams.find_with_member(user_data_id).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Team>, DomainError> {
        self.teams.find_by_id(id).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        self.teams.find_by_name(name).await
    }

    /// Create pipeline: bind -> validate -> authorize -> persist
    pub async fn create(
        &self,
        principal: &Principal,
        payload: TeamPayload,
    ) -> Result<Team, DomainError> {
        debug!(name = %payload.name, "Creating team");

        self.validate_payload(&payload).await?;

        if !policy::can_create_team(principal) {
            return Err(DomainError::permission_denied(
                "Not allowed to create teams",
            ));
        }

        let team = Team::new(
            &payload.name,
            payload.division_id,
            payload.leader_id,
            payload.member_ids,
        )
        .map_err(|e| DomainError::internal(format!("Validated payload rejected: {}", e)))?;

        let team = self.teams.create(team).await?;
        info!(team_id = team.id(), "Team created");
        Ok(team)
    }

    /// Edit pipeline: resolve -> validate -> authorize -> persist.
    ///
    /// The predicate is evaluated against the stored leader, not the one in
    /// the payload, so a leader cannot lose edit rights mid-request.
    pub async fn update(
        &self,
        principal: &Principal,
        id: i32,
        payload: TeamPayload,
    ) -> Result<Team, DomainError> {
        debug!(team_id = id, "Updating team");

        let mut team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team {} not found", id)))?;

        self.validate_payload(&payload).await?;

        if !policy::can_edit_team(principal, &team) {
            return Err(DomainError::permission_denied(
                "Not allowed to edit this team",
            ));
        }

        team.set_name(&payload.name)
            .map_err(|e| DomainError::internal(format!("Validated payload rejected: {}", e)))?;
        team.set_division(payload.division_id);
        team.set_leader(payload.leader_id);
        team.set_members(payload.member_ids);

        let team = self.teams.update(team).await?;
        info!(team_id = team.id(), "Team updated");
        Ok(team)
    }

    /// Delete pipeline: resolve -> authorize -> persist
    pub async fn delete(&self, principal: &Principal, id: i32) -> Result<(), DomainError> {
        debug!(team_id = id, "Deleting team");

        let team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team {} not found", id)))?;

        if !policy::can_delete_team(principal, &team) {
            return Err(DomainError::permission_denied(
                "Not allowed to delete this team",
            ));
        }

        let deleted = self.teams.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found(format!("Team {} not found", id)));
        }

        info!(team_id = id, "Team deleted");
        Ok(())
    }

    async fn resolve_profile(&self, user_data_id: i32) -> Result<(), DomainError> {
        self.profiles
            .find_by_id(user_data_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Profile {} not found", user_data_id)))?;
        Ok(())
    }

    /// Field rules plus referential checks on the payload's foreign keys.
    /// A dangling id in the payload is a field error, not a 404.
    async fn validate_payload(&self, payload: &TeamPayload) -> Result<(), DomainError> {
        let mut errors = FieldErrors::new();

        if let Err(e) = validate_team_name(&payload.name) {
            errors.add("name", e.to_string());
        }

        if self
            .references
            .find(ReferenceKind::Division, payload.division_id)
            .await?
            .is_none()
        {
            errors.add(
                "division",
                format!("Division {} does not exist", payload.division_id),
            );
        }

        if self.profiles.find_by_id(payload.leader_id).await?.is_none() {
            errors.add(
                "leader",
                format!("Profile {} does not exist", payload.leader_id),
            );
        }

        for member_id in &payload.member_ids {
            if self.profiles.find_by_id(*member_id).await?.is_none() {
                errors.add("members", format!("Profile {} does not exist", member_id));
            }
        }

        errors.into_result().map_err(DomainError::validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::{ROLE_RH_ADMIN, ROLE_RH_SUPERADMIN, RoleSet};
    use crate::domain::reference::{MockReferenceRepository, ReferenceEntity};
    use crate::domain::team::MockTeamRepository;
    use crate::domain::user_data::{MockUserDataRepository, UserData};

    fn references_with_all_divisions() -> Arc<MockReferenceRepository> {
        let mut references = MockReferenceRepository::new();
        references.expect_find().returning(|kind, id| {
            Ok(Some(ReferenceEntity {
                kind,
                id,
                name: "Division".to_string(),
            }))
        });
        Arc::new(references)
    }

    fn references_with_no_divisions() -> Arc<MockReferenceRepository> {
        let mut references = MockReferenceRepository::new();
        references.expect_find().returning(|_, _| Ok(None));
        Arc::new(references)
    }

    fn profile() -> UserData {
        UserData::new(1, 1, 1, 1, 1, None).unwrap()
    }

    fn service_with(
        references: Arc<MockReferenceRepository>,
    ) -> (Arc<MockTeamRepository>, Arc<MockUserDataRepository>, TeamService) {
        let teams = Arc::new(MockTeamRepository::new());
        let profiles = Arc::new(MockUserDataRepository::new());
        let service = TeamService::new(teams.clone(), profiles.clone(), references);
        (teams, profiles, service)
    }

    fn admin() -> Principal {
        Principal::new(
            1,
            Some(1),
            RoleSet::from_strings(vec![ROLE_RH_ADMIN.to_string()]),
        )
    }

    fn superadmin() -> Principal {
        Principal::new(
            2,
            None,
            RoleSet::from_strings(vec![ROLE_RH_SUPERADMIN.to_string()]),
        )
    }

    fn member_with_profile(user_data_id: i32) -> Principal {
        Principal::new(50, Some(user_data_id), RoleSet::new())
    }

    fn payload(name: &str, leader_id: i32, member_ids: Vec<i32>) -> TeamPayload {
        TeamPayload {
            name: name.to_string(),
            division_id: 1,
            leader_id,
            member_ids,
        }
    }

    #[tokio::test]
    async fn test_create_as_admin() {
        let (_, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());

        let team = service
            .create(&admin(), payload("Marketing", leader.id(), vec![]))
            .await
            .unwrap();

        assert!(team.id() > 0);
        assert_eq!(team.name(), "Marketing");
        assert_eq!(service.get(team.id()).await.unwrap(), Some(team));
    }

    #[tokio::test]
    async fn test_create_without_role_is_denied_before_any_write() {
        let (teams, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());

        let err = service
            .create(
                &member_with_profile(leader.id()),
                payload("Marketing", leader.id(), vec![]),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::PermissionDenied { .. }));
        assert_eq!(teams.write_count(), 0);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_superadmin_role_does_not_grant_creation() {
        let (teams, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());

        let err = service
            .create(&superadmin(), payload("Marketing", leader.id(), vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::PermissionDenied { .. }));
        assert_eq!(teams.write_count(), 0);
    }

    #[tokio::test]
    async fn test_create_with_unknown_division_collects_field_error() {
        let (teams, profiles, service) = service_with(references_with_no_divisions());
        let leader = profiles.seed(profile());

        let err = service
            .create(&admin(), payload("Marketing", leader.id(), vec![]))
            .await
            .unwrap_err();

        match err {
            DomainError::Validation { errors } => {
                assert!(errors.get("division").is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(teams.write_count(), 0);
    }

    #[tokio::test]
    async fn test_create_with_unknown_leader_and_member_collects_both_errors() {
        let (_, _, service) = service_with(references_with_all_divisions());

        let err = service
            .create(&admin(), payload("Marketing", 7, vec![8]))
            .await
            .unwrap_err();

        match err {
            DomainError::Validation { errors } => {
                assert!(errors.get("leader").is_some());
                assert!(errors.get("members").is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_by_leader() {
        let (teams, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());
        let team = teams.seed(Team::new("Marketing", 1, leader.id(), vec![]).unwrap());

        let updated = service
            .update(
                &member_with_profile(leader.id()),
                team.id(),
                payload("Sales", leader.id(), vec![]),
            )
            .await
            .unwrap();

        assert_eq!(updated.name(), "Sales");
    }

    #[tokio::test]
    async fn test_update_by_superadmin_without_profile() {
        let (teams, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());
        let team = teams.seed(Team::new("Marketing", 1, leader.id(), vec![]).unwrap());

        let updated = service
            .update(
                &superadmin(),
                team.id(),
                payload("Sales", leader.id(), vec![]),
            )
            .await
            .unwrap();

        assert_eq!(updated.name(), "Sales");
    }

    #[tokio::test]
    async fn test_denied_update_leaves_record_unchanged() {
        let (teams, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());
        let outsider = profiles.seed(UserData::new(2, 1, 1, 1, 1, None).unwrap());
        let team = teams.seed(Team::new("Marketing", 1, leader.id(), vec![]).unwrap());

        let err = service
            .update(
                &member_with_profile(outsider.id()),
                team.id(),
                payload("Sales", leader.id(), vec![]),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::PermissionDenied { .. }));
        assert_eq!(teams.write_count(), 0);
        let stored = service.get(team.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Marketing");
    }

    #[tokio::test]
    async fn test_update_unknown_team() {
        let (_, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());

        let err = service
            .update(&superadmin(), 99, payload("Sales", leader.id(), vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_by_leader_then_again_is_not_found() {
        let (teams, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());
        let team = teams.seed(Team::new("Marketing", 1, leader.id(), vec![]).unwrap());
        let principal = member_with_profile(leader.id());

        service.delete(&principal, team.id()).await.unwrap();

        let err = service.delete(&principal, team.id()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_denied_for_plain_member() {
        let (teams, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());
        let outsider = profiles.seed(UserData::new(2, 1, 1, 1, 1, None).unwrap());
        let team = teams.seed(Team::new("Marketing", 1, leader.id(), vec![]).unwrap());

        let err = service
            .delete(&member_with_profile(outsider.id()), team.id())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::PermissionDenied { .. }));
        assert!(service.get(team.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_leader_filter_excludes_membership() {
        let (teams, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());
        let member = profiles.seed(UserData::new(2, 1, 1, 1, 1, None).unwrap());
        let team = teams.seed(Team::new("Marketing", 1, leader.id(), vec![member.id()]).unwrap());

        let led = service.list_by_leader(leader.id()).await.unwrap();
        assert_eq!(led.len(), 1);
        assert_eq!(led[0].id(), team.id());

        // The leader is not in the member collection
        assert!(service.list_by_member(leader.id()).await.unwrap().is_empty());

        let joined = service.list_by_member(member.id()).await.unwrap();
        assert_eq!(joined.len(), 1);
        assert!(service.list_by_leader(member.id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_division_with_unknown_division() {
        let (_, _, service) = service_with(references_with_no_divisions());

        let err = service.list_by_division(9).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_by_leader_with_unknown_profile() {
        let (_, _, service) = service_with(references_with_all_divisions());

        let err = service.list_by_leader(42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_by_name() {
        let (teams, profiles, service) = service_with(references_with_all_divisions());
        let leader = profiles.seed(profile());
        teams.seed(Team::new("Marketing", 1, leader.id(), vec![]).unwrap());

        let team = service.get_by_name("Marketing").await.unwrap();
        assert!(team.is_some());
        assert!(service.get_by_name("Sales").await.unwrap().is_none());
    }
}
