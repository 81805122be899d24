use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Liveness probe: status, server time and crate version.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
