use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::CategoryRequest;
use crate::routes::AppState;
use crate::services::StoreError;

/// Configure category routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/categories", web::get().to(list_categories))
        .route("/categories", web::post().to(create_category))
        .route("/categories/{id}", web::get().to(get_category))
        .route("/categories/{id}", web::put().to(update_category))
        .route("/categories/{id}", web::delete().to(delete_category));
}

/// List categories
///
/// GET /api/categories
async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let categories = state.db.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// Create a category
///
/// POST /api/categories
async fn create_category(
    state: web::Data<AppState>,
    req: web::Json<CategoryRequest>,
) -> Result<HttpResponse, StoreError> {
    req.validate()?;

    let category = state.db.create_category(&req).await?;
    Ok(HttpResponse::Created().json(category))
}

/// Get a category
///
/// GET /api/categories/{id}
async fn get_category(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let category = state.db.get_category(*id).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// Rename a category
///
/// PUT /api/categories/{id}
async fn update_category(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    req: web::Json<CategoryRequest>,
) -> Result<HttpResponse, StoreError> {
    req.validate()?;

    let category = state.db.update_category(*id, &req).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// Delete a category
///
/// DELETE /api/categories/{id}
async fn delete_category(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    state.db.delete_category(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}
