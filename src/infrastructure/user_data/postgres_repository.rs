//! PostgreSQL profile repository

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::super::user::map_unique_violation;
use crate::domain::DomainError;
use crate::domain::user_data::{UserData, UserDataRepository};

const SELECT_COLUMNS: &str = "id, user_id, department_id, school_year_id, country_id, \
                              recruitment_event_id, phone, created_at, updated_at";

/// PostgreSQL implementation of UserDataRepository
#[derive(Debug, Clone)]
pub struct PostgresUserDataRepository {
    pool: PgPool,
}

impl PostgresUserDataRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_column(&self, column: &str, value: i32) -> Result<Vec<UserData>, DomainError> {
        let sql = format!(
            "SELECT {} FROM user_data WHERE {} = $1 ORDER BY id",
            SELECT_COLUMNS, column
        );

        let rows = sqlx::query(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list profiles: {}", e)))?;

        Ok(rows.iter().map(row_to_user_data).collect())
    }
}

#[async_trait]
impl UserDataRepository for PostgresUserDataRepository {
    async fn find_all(&self) -> Result<Vec<UserData>, DomainError> {
        let sql = format!("SELECT {} FROM user_data ORDER BY id", SELECT_COLUMNS);

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list profiles: {}", e)))?;

        Ok(rows.iter().map(row_to_user_data).collect())
    }

    async fn find_by_recruitment_event(&self, event_id: i32) -> Result<Vec<UserData>, DomainError> {
        self.fetch_by_column("recruitment_event_id", event_id).await
    }

    async fn find_by_department(&self, department_id: i32) -> Result<Vec<UserData>, DomainError> {
        self.fetch_by_column("department_id", department_id).await
    }

    async fn find_by_school_year(&self, school_year_id: i32) -> Result<Vec<UserData>, DomainError> {
        self.fetch_by_column("school_year_id", school_year_id).await
    }

    async fn find_by_country(&self, country_id: i32) -> Result<Vec<UserData>, DomainError> {
        self.fetch_by_column("country_id", country_id).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserData>, DomainError> {
        let sql = format!("SELECT {} FROM user_data WHERE id = $1", SELECT_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get profile: {}", e)))?;

        Ok(row.as_ref().map(row_to_user_data))
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Option<UserData>, DomainError> {
        let sql = format!("SELECT {} FROM user_data WHERE user_id = $1", SELECT_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get profile by user: {}", e)))?;

        Ok(row.as_ref().map(row_to_user_data))
    }

    async fn create(&self, user_data: UserData) -> Result<UserData, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO user_data (user_id, department_id, school_year_id, country_id,
                                   recruitment_event_id, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(user_data.user_id())
        .bind(user_data.department_id())
        .bind(user_data.school_year_id())
        .bind(user_data.country_id())
        .bind(user_data.recruitment_event_id())
        .bind(user_data.phone())
        .bind(user_data.created_at())
        .bind(user_data.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Profile", &user_data.user_id().to_string()))?;

        Ok(user_data.with_id(row.get("id")))
    }

    async fn update(&self, user_data: UserData) -> Result<UserData, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE user_data
            SET user_id = $2, department_id = $3, school_year_id = $4, country_id = $5,
                recruitment_event_id = $6, phone = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(user_data.id())
        .bind(user_data.user_id())
        .bind(user_data.department_id())
        .bind(user_data.school_year_id())
        .bind(user_data.country_id())
        .bind(user_data.recruitment_event_id())
        .bind(user_data.phone())
        .bind(user_data.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Profile", &user_data.user_id().to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Profile {} not found",
                user_data.id()
            )));
        }

        Ok(user_data)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM user_data WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let msg = e.to_string();
                // Deleting a profile that still leads a team trips the
                // RESTRICT constraint on teams.leader_id
                if msg.contains("foreign key constraint") {
                    DomainError::conflict(format!("Profile {} still leads a team", id))
                } else {
                    DomainError::storage(format!("Failed to delete profile: {}", e))
                }
            })?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_user_data(row: &sqlx::postgres::PgRow) -> UserData {
    UserData::from_parts(
        row.get("id"),
        row.get("user_id"),
        row.get("department_id"),
        row.get("school_year_id"),
        row.get("country_id"),
        row.get("recruitment_event_id"),
        row.get("phone"),
        row.get("created_at"),
        row.get("updated_at"),
    )
}
