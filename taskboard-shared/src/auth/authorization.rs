/// Authorization helpers and permission checks
///
/// Taskboard defines a single object-level rule: the task detail view is
/// visible only to the task's assignee. The check is a plain predicate over
/// (actor, resource); every other endpoint requires only an authenticated
/// identity.
///
/// Note on information disclosure: the detail endpoint distinguishes 404 (no
/// such task) from 403 (task exists, wrong assignee), so an authenticated
/// caller can probe for task existence. This mirrors the upstream behavior
/// and is deliberate.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::auth::authorization::require_assignee;
/// use taskboard_shared::auth::middleware::AuthContext;
/// use taskboard_shared::models::task::Task;
///
/// fn check(auth: &AuthContext, task: &Task) -> bool {
///     require_assignee(auth, task).is_ok()
/// }
/// ```

use super::middleware::AuthContext;
use crate::models::task::Task;

/// Error type for authorization checks
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// Actor is not the task's assignee
    #[error("Not authorized to access this task")]
    NotAssignee,
}

/// Checks whether the actor is the task's assignee
///
/// Allow iff `task.assigned_to == auth.user_id`.
pub fn is_assignee(auth: &AuthContext, task: &Task) -> bool {
    task.assigned_to == auth.user_id
}

/// Requires that the actor is the task's assignee
///
/// # Errors
///
/// Returns `AuthzError::NotAssignee` when the actor does not own the task;
/// callers map this to HTTP 403.
pub fn require_assignee(auth: &AuthContext, task: &Task) -> Result<(), AuthzError> {
    if is_assignee(auth, task) {
        Ok(())
    } else {
        Err(AuthzError::NotAssignee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn task_owned_by(owner: Uuid) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: "t1".to_string(),
            description: "d1".to_string(),
            assigned_to: owner,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_assignee_is_authorized() {
        let user_id = Uuid::new_v4();
        let auth = AuthContext::from_jwt(user_id, "alice".to_string());
        let task = task_owned_by(user_id);

        assert!(is_assignee(&auth, &task));
        assert!(require_assignee(&auth, &task).is_ok());
    }

    #[test]
    fn test_non_assignee_is_denied() {
        let auth = AuthContext::from_jwt(Uuid::new_v4(), "bob".to_string());
        let task = task_owned_by(Uuid::new_v4());

        assert!(!is_assignee(&auth, &task));
        assert!(matches!(
            require_assignee(&auth, &task),
            Err(AuthzError::NotAssignee)
        ));
    }
}
