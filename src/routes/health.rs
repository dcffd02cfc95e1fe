use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Root endpoint. Also serves as the redirect target for blank-id user
/// lookups.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("hi")
}

/// Health check endpoint
///
/// Returns the current status of the API and timestamp.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    }))
}
