//! PostgreSQL implementation of ActivityStore.
//!
//! Persists activities to the `activities` table, one row per activity with
//! the participants held in a `TEXT[]` column.

use async_trait::async_trait;
use futures::stream::StreamExt;
use sqlx::{PgPool, Row};

use crate::domain::activity::Activity;
use crate::domain::foundation::DomainError;
use crate::ports::{ActivityStore, ActivityStream};

const SQL_SELECT_ALL: &str = r#"
SELECT name, description, schedule, max_participants, participants
FROM activities
ORDER BY name
"#;

const SQL_SELECT_ONE: &str = r#"
SELECT name, description, schedule, max_participants, participants
FROM activities
WHERE name = $1
"#;

const SQL_INSERT: &str = r#"
INSERT INTO activities (name, description, schedule, max_participants, participants)
VALUES ($1, $2, $3, $4, $5)
"#;

// The duplicate and capacity guards live in the WHERE clause so the check and
// the append happen in one statement.
const SQL_APPEND_PARTICIPANT: &str = r#"
UPDATE activities
SET participants = array_append(participants, $2)
WHERE name = $1
  AND NOT ($2 = ANY(participants))
  AND cardinality(participants) < max_participants
"#;

/// PostgreSQL implementation of ActivityStore.
#[derive(Clone)]
pub struct PostgresActivityStore {
    pool: PgPool,
}

impl PostgresActivityStore {
    /// Creates a new PostgresActivityStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), DomainError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))
    }
}

#[async_trait]
impl ActivityStore for PostgresActivityStore {
    async fn count(&self) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activities")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count activities: {}", e)))?;

        Ok(result.0.max(0) as u64)
    }

    async fn insert_many(&self, records: &[Activity]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        for record in records {
            sqlx::query(SQL_INSERT)
                .bind(record.name())
                .bind(record.description())
                .bind(record.schedule())
                .bind(capacity_to_column(record.max_participants())?)
                .bind(record.participants())
                .execute(&mut *tx)
                .await
                .map_err(|e| insert_error(record.name(), e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit activities: {}", e)))
    }

    async fn find_one(&self, name: &str) -> Result<Option<Activity>, DomainError> {
        let row = sqlx::query(SQL_SELECT_ONE)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch activity: {}", e)))?;

        row.map(row_to_activity).transpose()
    }

    fn find_all(&self) -> ActivityStream<'_> {
        sqlx::query(SQL_SELECT_ALL)
            .fetch(&self.pool)
            .map(|row| {
                row.map_err(|e| DomainError::database(format!("Failed to fetch activities: {}", e)))
                    .and_then(row_to_activity)
            })
            .boxed()
    }

    async fn append_participant(&self, name: &str, email: &str) -> Result<bool, DomainError> {
        let result = sqlx::query(SQL_APPEND_PARTICIPANT)
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to append participant: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn insert_error(name: &str, err: sqlx::Error) -> DomainError {
    let unique_violation = err
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false);

    if unique_violation {
        DomainError::duplicate_key(name)
    } else {
        DomainError::database(format!("Failed to insert activity '{}': {}", name, err))
    }
}

fn capacity_to_column(max_participants: u32) -> Result<i32, DomainError> {
    i32::try_from(max_participants).map_err(|_| {
        DomainError::database(format!(
            "max_participants {} does not fit the column",
            max_participants
        ))
    })
}

fn capacity_from_column(value: i32) -> Result<u32, DomainError> {
    u32::try_from(value)
        .map_err(|_| DomainError::database(format!("Invalid max_participants: {}", value)))
}

fn row_to_activity(row: sqlx::postgres::PgRow) -> Result<Activity, DomainError> {
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?;

    let description: String = row
        .try_get("description")
        .map_err(|e| DomainError::database(format!("Failed to get description: {}", e)))?;

    let schedule: String = row
        .try_get("schedule")
        .map_err(|e| DomainError::database(format!("Failed to get schedule: {}", e)))?;

    let max_participants: i32 = row
        .try_get("max_participants")
        .map_err(|e| DomainError::database(format!("Failed to get max_participants: {}", e)))?;

    let participants: Vec<String> = row
        .try_get("participants")
        .map_err(|e| DomainError::database(format!("Failed to get participants: {}", e)))?;

    Ok(Activity::reconstitute(
        name,
        description,
        schedule,
        capacity_from_column(max_participants)?,
        participants,
    ))
}
