//! PostgreSQL user account repository

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::DomainError;
use crate::domain::access::RoleSet;
use crate::domain::user::{User, UserRepository};

const SELECT_COLUMNS: &str =
    "id, username, email, first_name, last_name, roles, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM users ORDER BY id",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE username = $1",
            SELECT_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by username: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, first_name, last_name, roles,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(user.username())
        .bind(user.email())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.roles().to_sorted_vec())
        .bind(user.created_at())
        .bind(user.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "User", user.username()))?;

        Ok(user.with_id(row.get("id")))
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, first_name = $4, last_name = $5,
                roles = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id())
        .bind(user.username())
        .bind(user.email())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.roles().to_sorted_vec())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "User", user.username()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "User {} not found",
                user.id()
            )));
        }

        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let roles: Vec<String> = row.get("roles");

    Ok(User::from_parts(
        row.get("id"),
        row.get("username"),
        row.get("email"),
        row.get("first_name"),
        row.get("last_name"),
        RoleSet::from_strings(roles),
        row.get("created_at"),
        row.get("updated_at"),
    ))
}

pub(crate) fn map_unique_violation(e: sqlx::Error, entity: &str, key: &str) -> DomainError {
    let msg = e.to_string();

    if msg.contains("duplicate key") || msg.contains("unique constraint") {
        DomainError::conflict(format!("{} '{}' already exists", entity, key))
    } else {
        DomainError::storage(format!("Failed to write {}: {}", entity.to_lowercase(), e))
    }
}
