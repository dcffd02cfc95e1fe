use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A user row as stored in the database and returned by the API.
///
/// Passwords are stored and returned exactly as provided; this service has
/// no hashing step.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /User`. All three fields must be present and non-empty;
/// no format rules beyond that.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// A validated new user ready for insertion, with a freshly generated id.
#[derive(Debug)]
pub struct NewUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserInput {
    /// Converts into a `NewUser` if every field is present and non-empty.
    pub fn into_new_user(self) -> Option<NewUser> {
        if self.validate().is_err() {
            return None;
        }
        Some(NewUser {
            id: Uuid::new_v4(),
            name: self.name?,
            email: self.email?,
            password: self.password?,
        })
    }
}

/// Payload for `PATCH /User/{id}`. At least one field must be supplied;
/// empty strings count as absent.
#[derive(Debug, Deserialize)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserInput {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|s| !s.is_empty())
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.email().is_none() && self.password().is_none()
    }
}
