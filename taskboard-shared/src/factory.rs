/// Task construction service
///
/// The single chokepoint through which task rows are created. Handlers never
/// insert tasks directly; they call [`TaskFactory::create_task`], which keeps
/// the creation path narrow so alternate construction strategies (templated
/// tasks, default priorities) can be introduced later without touching
/// handler code.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::factory::{CreateTask, TaskFactory};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = TaskFactory::create_task(
///     &pool,
///     CreateTask {
///         title: "Write report".to_string(),
///         description: "Quarterly numbers".to_string(),
///         assigned_to: Uuid::new_v4(),
///     },
/// )
/// .await?;
/// println!("Created task: {}", task.id);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::task::Task;

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title, non-empty
    pub title: String,

    /// Task description, may be empty
    pub description: String,

    /// Owning user, fixed at creation
    pub assigned_to: Uuid,
}

/// Factory for constructing task entities
pub struct TaskFactory;

impl TaskFactory {
    /// Creates a new task owned by `data.assigned_to`
    ///
    /// This is the only code path that inserts task rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner does not exist (foreign key) or the
    /// database is unreachable.
    pub async fn create_task(pool: &PgPool, data: CreateTask) -> Result<Task, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, assigned_to)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, assigned_to, created_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.assigned_to)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_struct() {
        let data = CreateTask {
            title: "t1".to_string(),
            description: "d1".to_string(),
            assigned_to: Uuid::new_v4(),
        };

        assert_eq!(data.title, "t1");
        assert_eq!(data.description, "d1");
    }

    // Creation against a live database is covered by the API route tests
}
