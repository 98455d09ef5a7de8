/// Task model and read operations
///
/// A task is owned by exactly one user, fixed at creation time; ownership
/// never transfers. Rows are inserted only through
/// [`crate::factory::TaskFactory`], so this model exposes reads only.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     assigned_to UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Task model representing a task assigned to a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (UUID v4)
    pub id: Uuid,

    /// Task title, non-empty
    pub title: String,

    /// Task description, may be empty
    pub description: String,

    /// User who owns the task, assigned at creation
    pub assigned_to: Uuid,

    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Finds a task by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, assigned_to, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, assigned_to, created_at
            FROM tasks
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serialization() {
        let task = Task {
            id: Uuid::new_v4(),
            title: "t1".to_string(),
            description: String::new(),
            assigned_to: Uuid::new_v4(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"title\":\"t1\""));
        assert!(json.contains("assigned_to"));
    }
}
