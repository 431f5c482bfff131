use actix_web::{web, HttpResponse};

use crate::routes::AppState;
use crate::services::StoreError;

/// Configure statistics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats/top-skills", web::get().to(top_skills))
        .route("/stats/active-users", web::get().to(active_users))
        .route(
            "/stats/exchange-success-rate",
            web::get().to(exchange_success_rate),
        );
}

/// Most exchanged-over skills
///
/// GET /api/stats/top-skills
async fn top_skills(state: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let rows = state.db.top_skills().await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Users with the most exchange participation
///
/// GET /api/stats/active-users
async fn active_users(state: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let rows = state.db.active_users().await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Share of exchanges that completed
///
/// GET /api/stats/exchange-success-rate
async fn exchange_success_rate(state: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let rate = state.db.exchange_success_rate().await?;
    Ok(HttpResponse::Ok().json(rate))
}
