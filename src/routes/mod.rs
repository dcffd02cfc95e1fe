pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;
use uuid::Uuid;

use crate::error::AppError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/User")
            .service(users::create_user)
            .service(users::get_all_users)
            .service(users::get_user)
            .service(users::delete_user)
            .service(users::update_user),
    )
    .service(
        // `/user/{userId}` must stay registered ahead of `/{id}/users` so
        // the one ambiguous path, `/task/user/users`, keeps resolving to the
        // tasks-for-user handler.
        web::scope("/task")
            .service(tasks::create_task)
            .service(tasks::get_all_tasks)
            .service(tasks::get_task)
            .service(tasks::update_task)
            .service(tasks::get_tasks_for_user)
            .service(tasks::create_task_for_all_users)
            .service(tasks::get_users_for_task),
    );
}

/// Parses a path segment as a UUID. Malformed ids are rejected with a 400
/// before any query runs.
pub(crate) fn parse_id(raw: &str, message: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(message.into()))
}
