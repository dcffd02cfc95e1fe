use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A task row as stored in the database and returned by the API.
///
/// `status` is a plain boolean (done / not done) defaulting to `false`.
/// Assigned users live in the `task_assignments` join table and are exposed
/// through the `/task/user/{userId}` and `/task/{id}/users` endpoints rather
/// than embedded here.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /task`.
///
/// `title` and `description` must be present and non-empty, and at least one
/// user id must be supplied. `status` is optional and defaults to `false`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskInput {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    pub status: Option<bool>,
    #[validate(required, length(min = 1))]
    pub user_ids: Option<Vec<Uuid>>,
}

/// Payload for `POST /task/all-users`. Same as `CreateTaskInput` minus the
/// user id list, since the task is connected to every stored user.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskForAllUsersInput {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    pub status: Option<bool>,
}

/// A validated new task ready for insertion, with a freshly generated id.
#[derive(Debug)]
pub struct NewTask {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: bool,
}

impl CreateTaskInput {
    /// Converts into a `NewTask` plus the list of user ids to connect.
    /// Returns `None` when a required field is missing, empty, or the id
    /// list has no entries.
    pub fn into_parts(self) -> Option<(NewTask, Vec<Uuid>)> {
        if self.validate().is_err() {
            return None;
        }
        let task = NewTask {
            id: Uuid::new_v4(),
            title: self.title?,
            description: self.description?,
            status: self.status.unwrap_or(false),
        };
        Some((task, self.user_ids?))
    }
}

impl TaskForAllUsersInput {
    pub fn into_new_task(self) -> Option<NewTask> {
        if self.validate().is_err() {
            return None;
        }
        Some(NewTask {
            id: Uuid::new_v4(),
            title: self.title?,
            description: self.description?,
            status: self.status.unwrap_or(false),
        })
    }
}

/// Payload for `PATCH /task/{id}`. At least one field must be supplied.
/// Empty-string text fields count as absent, but an explicit `status` of
/// `false` counts as supplied.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<bool>,
}

impl UpdateTaskInput {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|s| !s.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.title().is_none() && self.description().is_none() && self.status.is_none()
    }
}
