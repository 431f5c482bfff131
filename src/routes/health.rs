use actix_web::{web, HttpResponse, Responder};

use crate::models::HealthResponse;
use crate::routes::AppState;

/// Welcome endpoint
///
/// GET /
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "SkillSwap API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "users": "/api/users",
            "skills": "/api/skills",
            "exchanges": "/api/exchanges",
            "reviews": "/api/reviews",
            "categories": "/api/categories",
            "stats": "/api/stats",
            "photos": "/api/photos",
        },
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (status, database) = match state.db.ping().await {
        Ok(()) => ("healthy", "connected".to_string()),
        Err(e) => {
            tracing::warn!("Health check failed to reach the database: {}", e);
            ("degraded", format!("error: {}", e))
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
