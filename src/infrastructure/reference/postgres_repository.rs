//! PostgreSQL reference lookup repository

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::DomainError;
use crate::domain::reference::{ReferenceEntity, ReferenceKind, ReferenceRepository};

/// PostgreSQL implementation of ReferenceRepository
#[derive(Debug, Clone)]
pub struct PostgresReferenceRepository {
    pool: PgPool,
}

impl PostgresReferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceRepository for PostgresReferenceRepository {
    async fn find(
        &self,
        kind: ReferenceKind,
        id: i32,
    ) -> Result<Option<ReferenceEntity>, DomainError> {
        // Table name comes from the ReferenceKind enum, never from input
        let sql = format!("SELECT id, name FROM {} WHERE id = $1", kind.table());

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to look up {}: {}", kind.label(), e))
            })?;

        Ok(row.map(|row| ReferenceEntity {
            kind,
            id: row.get("id"),
            name: row.get("name"),
        }))
    }
}
