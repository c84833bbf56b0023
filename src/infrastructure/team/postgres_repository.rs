//! PostgreSQL team repository
//!
//! Member profiles live in the `team_members` join table; every select
//! aggregates them back into the entity, and writes replace the join rows in
//! the same transaction as the team row.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};

use super::super::user::map_unique_violation;
use crate::domain::DomainError;
use crate::domain::team::{Team, TeamRepository};

const SELECT_TEAMS: &str = r#"
    SELECT t.id, t.name, t.division_id, t.leader_id, t.created_at, t.updated_at,
           COALESCE(
               (SELECT array_agg(tm.user_data_id ORDER BY tm.user_data_id)
                FROM team_members tm WHERE tm.team_id = t.id),
               '{}'
           ) AS member_ids
    FROM teams t
"#;

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, where_clause: &str, bind: i32) -> Result<Vec<Team>, DomainError> {
        let sql = format!("{} WHERE {} ORDER BY t.id", SELECT_TEAMS, where_clause);

        let rows = sqlx::query(&sql)
            .bind(bind)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))?;

        Ok(rows.iter().map(row_to_team).collect())
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_all(&self) -> Result<Vec<Team>, DomainError> {
        let sql = format!("{} ORDER BY t.id", SELECT_TEAMS);

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))?;

        Ok(rows.iter().map(row_to_team).collect())
    }

    async fn find_by_division(&self, division_id: i32) -> Result<Vec<Team>, DomainError> {
        self.fetch_many("t.division_id = $1", division_id).await
    }

    async fn find_by_leader(&self, user_data_id: i32) -> Result<Vec<Team>, DomainError> {
        self.fetch_many("t.leader_id = $1", user_data_id).await
    }

    async fn find_with_member(&self, user_data_id: i32) -> Result<Vec<Team>, DomainError> {
        self.fetch_many(
            "EXISTS (SELECT 1 FROM team_members tm \
             WHERE tm.team_id = t.id AND tm.user_data_id = $1)",
            user_data_id,
        )
        .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DomainError> {
        let sql = format!("{} WHERE t.id = $1", SELECT_TEAMS);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        Ok(row.as_ref().map(row_to_team))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        let sql = format!("{} WHERE t.name = $1", SELECT_TEAMS);

        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get team by name: {}", e)))?;

        Ok(row.as_ref().map(row_to_team))
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let mut tx = begin(&self.pool).await?;

        let row = sqlx::query(
            r#"
            INSERT INTO teams (name, division_id, leader_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(team.name())
        .bind(team.division_id())
        .bind(team.leader_id())
        .bind(team.created_at())
        .bind(team.updated_at())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, "Team", team.name()))?;

        let team = team.with_id(row.get("id"));
        replace_members(&mut tx, &team).await?;
        commit(tx).await?;

        Ok(team)
    }

    async fn update(&self, team: Team) -> Result<Team, DomainError> {
        let mut tx = begin(&self.pool).await?;

        let result = sqlx::query(
            r#"
            UPDATE teams
            SET name = $2, division_id = $3, leader_id = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.division_id())
        .bind(team.leader_id())
        .bind(team.updated_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, "Team", team.name()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Team {} not found",
                team.id()
            )));
        }

        sqlx::query("DELETE FROM team_members WHERE team_id = $1")
            .bind(team.id())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to clear team members: {}", e)))?;

        replace_members(&mut tx, &team).await?;
        commit(tx).await?;

        Ok(team)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        // Join rows cascade with the team
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete team: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

async fn begin(pool: &PgPool) -> Result<Transaction<'_, Postgres>, DomainError> {
    pool.begin()
        .await
        .map_err(|e| DomainError::storage(format!("Failed to open transaction: {}", e)))
}

async fn commit(tx: Transaction<'_, Postgres>) -> Result<(), DomainError> {
    tx.commit()
        .await
        .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))
}

async fn replace_members(
    tx: &mut Transaction<'_, Postgres>,
    team: &Team,
) -> Result<(), DomainError> {
    for &user_data_id in team.member_ids() {
        sqlx::query("INSERT INTO team_members (team_id, user_data_id) VALUES ($1, $2)")
            .bind(team.id())
            .bind(user_data_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to insert team member: {}", e)))?;
    }

    Ok(())
}

fn row_to_team(row: &sqlx::postgres::PgRow) -> Team {
    Team::from_parts(
        row.get("id"),
        row.get("name"),
        row.get("division_id"),
        row.get("leader_id"),
        row.get("member_ids"),
        row.get("created_at"),
        row.get("updated_at"),
    )
}
