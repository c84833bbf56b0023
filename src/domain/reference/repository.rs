//! Reference lookup repository trait

use async_trait::async_trait;

use super::entity::{ReferenceEntity, ReferenceKind};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the reference tables
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReferenceRepository: Send + Sync + std::fmt::Debug {
    /// Resolve a reference row by kind and id
    async fn find(
        &self,
        kind: ReferenceKind,
        id: i32,
    ) -> Result<Option<ReferenceEntity>, DomainError>;
}

/// Resolve a reference or fail NotFound, for path-parameter filters
pub async fn resolve_or_not_found(
    repo: &dyn ReferenceRepository,
    kind: ReferenceKind,
    id: i32,
) -> Result<ReferenceEntity, DomainError> {
    repo.find(kind, id)
        .await?
        .ok_or_else(|| DomainError::not_found(format!("{} {} not found", kind, id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_or_not_found_hit() {
        let mut repo = MockReferenceRepository::new();
        repo.expect_find()
            .withf(|kind, id| *kind == ReferenceKind::Division && *id == 3)
            .returning(|kind, id| {
                Ok(Some(ReferenceEntity {
                    kind,
                    id,
                    name: "Sales".to_string(),
                }))
            });

        let entity = resolve_or_not_found(&repo, ReferenceKind::Division, 3)
            .await
            .unwrap();
        assert_eq!(entity.name, "Sales");
    }

    #[tokio::test]
    async fn test_resolve_or_not_found_miss() {
        let mut repo = MockReferenceRepository::new();
        repo.expect_find().returning(|_, _| Ok(None));

        let err = resolve_or_not_found(&repo, ReferenceKind::Country, 99)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Not found: Country 99 not found");
    }
}
