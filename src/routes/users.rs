use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{CreateUserRequest, PaginationQuery, UpdateUserRequest};
use crate::routes::AppState;
use crate::services::StoreError;

/// Configure user routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(list_users))
        .route("/users", web::post().to(create_user))
        .route("/users/{id}", web::get().to(get_user))
        .route("/users/{id}", web::put().to(update_user))
        .route("/users/{id}/skills", web::get().to(user_skills));
}

/// List users
///
/// GET /api/users
async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, StoreError> {
    let users = state.db.list_users(query.skip, query.limit).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Register a user
///
/// POST /api/users
async fn create_user(
    state: web::Data<AppState>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, StoreError> {
    req.validate()?;

    let user = state.db.create_user(&req).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Get a user
///
/// GET /api/users/{id}
async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let user = state.db.get_user(*id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Update a user's profile
///
/// PUT /api/users/{id}
async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    req: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, StoreError> {
    req.validate()?;

    let user = state.db.update_user(*id, &req).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// List the skills a user offers or seeks
///
/// GET /api/users/{id}/skills
async fn user_skills(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let skills = state.db.user_skills(*id).await?;
    Ok(HttpResponse::Ok().json(skills))
}
