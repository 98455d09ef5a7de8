/// Task collection and detail endpoints
///
/// # Endpoints
///
/// - `GET /tasks/` - List all tasks
/// - `POST /tasks/` - Create a task owned by the requester
/// - `GET /tasks/:id/` - Task detail, assignee only
///
/// Creation goes through the task factory; the owner is always the
/// authenticated requester, regardless of anything in the payload (the DTO
/// carries no owner field). The detail view enforces the assignee check and
/// intentionally distinguishes 404 from 403.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    validation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::{authorization::require_assignee, middleware::AuthContext},
    factory::{CreateTask, TaskFactory},
    models::task::Task,
};
use uuid::Uuid;
use validator::Validate;

/// Create task request
///
/// There is deliberately no owner field; the owner is the requester.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,

    /// Task description, may be empty
    #[validate(required(message = "description is required"))]
    pub description: Option<String>,
}

/// Serialized task
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    /// Task ID
    pub id: Uuid,

    /// Task title
    pub title: String,

    /// Task description
    pub description: String,

    /// Owning user's ID
    pub assigned_to: Uuid,

    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            assigned_to: task.assigned_to,
            created_at: task.created_at,
        }
    }
}

/// Creation confirmation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// List tasks endpoint
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid credential
/// - `500 Internal Server Error`: Infrastructure failure
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = Task::list(&state.db).await?;

    tracing::info!(accessed_by = %auth.username, "Task list accessed");

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Create task endpoint
///
/// Validates the payload and invokes the task factory with the requester as
/// owner.
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed (field error map)
/// - `401 Unauthorized`: Missing or invalid credential
/// - `500 Internal Server Error`: Infrastructure failure
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    if let Err(errors) = validation::check(&req) {
        tracing::warn!("Task creation failed due to validation error");
        return Err(ApiError::ValidationError(errors));
    }

    let task = TaskFactory::create_task(&state.db, task_input(req, &auth)).await?;

    tracing::info!(task_id = %task.id, "Task created via factory");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Task created successfully".to_string(),
        }),
    ))
}

/// Task detail endpoint
///
/// Looks up the task by id, then enforces the assignee check. Absent tasks
/// return 404; existing tasks owned by someone else return 403.
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid credential
/// - `403 Forbidden`: Requester is not the assignee
/// - `404 Not Found`: No task with this id
/// - `500 Internal Server Error`: Infrastructure failure
pub async fn task_detail(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TaskResponse>> {
    let found = Task::find_by_id(&state.db, id).await?;
    let task = authorize_detail(&auth, id, found)?;

    tracing::info!(task_id = %task.id, accessed_by = %auth.username, "Task accessed");

    Ok(Json(TaskResponse::from(task)))
}

/// Builds the factory input from a validated request
///
/// The owner is always the requester; nothing in the payload can change it.
fn task_input(req: CreateTaskRequest, auth: &AuthContext) -> CreateTask {
    // Required fields are Some after validation
    CreateTask {
        title: req.title.unwrap_or_default(),
        description: req.description.unwrap_or_default(),
        assigned_to: auth.user_id,
    }
}

/// Resolves a detail lookup against the requester
///
/// An absent task is 404 before any ownership check runs, so the response
/// for a non-existent id never depends on who asks. An existing task owned
/// by someone else is 403.
fn authorize_detail(
    auth: &AuthContext,
    id: Uuid,
    task: Option<Task>,
) -> Result<Task, ApiError> {
    let task = task.ok_or_else(|| {
        tracing::warn!(task_id = %id, "Attempted access to non-existent task");
        ApiError::NotFound("Task not found".to_string())
    })?;

    require_assignee(auth, &task)?;

    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn task_owned_by(owner: Uuid) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: "quarterly report".to_string(),
            description: "numbers for Q3".to_string(),
            assigned_to: owner,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_absent_task_is_not_found_never_forbidden() {
        let auth = AuthContext::from_jwt(Uuid::new_v4(), "alice".to_string());

        let result = authorize_detail(&auth, Uuid::new_v4(), None);
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_foreign_task_is_forbidden() {
        let auth = AuthContext::from_jwt(Uuid::new_v4(), "bob".to_string());
        let task = task_owned_by(Uuid::new_v4());
        let id = task.id;

        let result = authorize_detail(&auth, id, Some(task));
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_forbidden_response_carries_no_task_fields() {
        let auth = AuthContext::from_jwt(Uuid::new_v4(), "bob".to_string());
        let task = task_owned_by(Uuid::new_v4());
        let id = task.id;

        let err = authorize_detail(&auth, id, Some(task)).unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("quarterly report"));
        assert!(!body.contains(&id.to_string()));
    }

    #[test]
    fn test_assignee_gets_the_exact_task() {
        let user_id = Uuid::new_v4();
        let auth = AuthContext::from_jwt(user_id, "alice".to_string());
        let task = task_owned_by(user_id);
        let id = task.id;

        let resolved = authorize_detail(&auth, id, Some(task)).unwrap();
        assert_eq!(resolved.id, id);
        assert_eq!(resolved.assigned_to, user_id);
        assert_eq!(resolved.title, "quarterly report");
    }

    #[test]
    fn test_created_task_owner_is_the_requester() {
        let auth = AuthContext::from_jwt(Uuid::new_v4(), "alice".to_string());

        // A spurious owner in the payload is ignored on deserialization
        let req: CreateTaskRequest = serde_json::from_value(serde_json::json!({
            "title": "t1",
            "description": "d1",
            "assigned_to": Uuid::new_v4(),
        }))
        .unwrap();

        let input = task_input(req, &auth);
        assert_eq!(input.assigned_to, auth.user_id);
        assert_eq!(input.title, "t1");
        assert_eq!(input.description, "d1");
    }

    #[test]
    fn test_missing_title_is_a_field_error() {
        let req = CreateTaskRequest {
            title: None,
            description: Some("d1".to_string()),
        };

        let errors = validation::check(&req).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let req = CreateTaskRequest {
            title: Some(String::new()),
            description: Some("d1".to_string()),
        };

        assert!(validation::check(&req).is_err());
    }

    #[test]
    fn test_empty_description_is_accepted() {
        let req = CreateTaskRequest {
            title: Some("t1".to_string()),
            description: Some(String::new()),
        };

        assert!(validation::check(&req).is_ok());
    }

    #[test]
    fn test_task_response_serialization() {
        let task = Task {
            id: Uuid::new_v4(),
            title: "t1".to_string(),
            description: "d1".to_string(),
            assigned_to: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        let owner = task.assigned_to;

        let response = TaskResponse::from(task);
        assert_eq!(response.assigned_to, owner);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"title\":\"t1\""));
        assert!(json.contains("assigned_to"));
    }
}
