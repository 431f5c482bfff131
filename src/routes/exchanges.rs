use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{
    ActingUserQuery, CreateExchangeRequest, CurrentUserQuery, ListExchangesQuery, SenderQuery,
    UpdateExchangeRequest,
};
use crate::routes::AppState;
use crate::services::StoreError;

/// Configure exchange routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/exchanges", web::get().to(list_exchanges))
        .route("/exchanges", web::post().to(create_exchange))
        .route("/exchanges/my/sent", web::get().to(sent_exchanges))
        .route("/exchanges/my/received", web::get().to(received_exchanges))
        .route("/exchanges/{id}", web::get().to(get_exchange))
        .route("/exchanges/{id}", web::put().to(update_exchange));
}

/// List exchanges with optional status and participant filters
///
/// GET /api/exchanges?status_filter=pending&user_id=1
async fn list_exchanges(
    state: web::Data<AppState>,
    query: web::Query<ListExchangesQuery>,
) -> Result<HttpResponse, StoreError> {
    let exchanges = state.db.list_exchanges(&query).await?;
    Ok(HttpResponse::Ok().json(exchanges))
}

/// Propose an exchange
///
/// POST /api/exchanges?sender_id=1
async fn create_exchange(
    state: web::Data<AppState>,
    query: web::Query<SenderQuery>,
    req: web::Json<CreateExchangeRequest>,
) -> Result<HttpResponse, StoreError> {
    req.validate()?;

    let exchange = state.db.create_exchange(query.sender_id, &req).await?;
    Ok(HttpResponse::Created().json(exchange))
}

/// Get an exchange with both parties and the skill
///
/// GET /api/exchanges/{id}
async fn get_exchange(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let detail = state.db.get_exchange_detail(*id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Move an exchange through its lifecycle
///
/// PUT /api/exchanges/{id}?current_user_id=2
async fn update_exchange(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    query: web::Query<CurrentUserQuery>,
    req: web::Json<UpdateExchangeRequest>,
) -> Result<HttpResponse, StoreError> {
    req.validate()?;

    let exchange = state
        .db
        .update_exchange_status(*id, query.current_user_id, &req)
        .await?;
    Ok(HttpResponse::Ok().json(exchange))
}

/// Exchanges the acting user has sent
///
/// GET /api/exchanges/my/sent?user_id=1
async fn sent_exchanges(
    state: web::Data<AppState>,
    query: web::Query<ActingUserQuery>,
) -> Result<HttpResponse, StoreError> {
    let exchanges = state.db.sent_exchanges(query.user_id).await?;
    Ok(HttpResponse::Ok().json(exchanges))
}

/// Exchanges the acting user has received
///
/// GET /api/exchanges/my/received?user_id=1
async fn received_exchanges(
    state: web::Data<AppState>,
    query: web::Query<ActingUserQuery>,
) -> Result<HttpResponse, StoreError> {
    let exchanges = state.db.received_exchanges(query.user_id).await?;
    Ok(HttpResponse::Ok().json(exchanges))
}
