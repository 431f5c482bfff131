use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{ActingUserQuery, CreateSkillRequest, ListSkillsQuery, UpdateSkillRequest};
use crate::routes::AppState;
use crate::services::StoreError;

/// Configure skill routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/skills", web::get().to(list_skills))
        .route("/skills", web::post().to(create_skill))
        .route("/skills/{id}", web::get().to(get_skill))
        .route("/skills/{id}", web::put().to(update_skill))
        .route("/skills/{id}", web::delete().to(delete_skill))
        .route("/skills/{id}/matches", web::get().to(find_matches));
}

/// List skills with optional filters
///
/// GET /api/skills?category=music&can_teach=true&search=guitar
async fn list_skills(
    state: web::Data<AppState>,
    query: web::Query<ListSkillsQuery>,
) -> Result<HttpResponse, StoreError> {
    let skills = state.db.list_skills(&query).await?;
    Ok(HttpResponse::Ok().json(skills))
}

/// Post a skill for the acting user
///
/// POST /api/skills?user_id=1
async fn create_skill(
    state: web::Data<AppState>,
    query: web::Query<ActingUserQuery>,
    req: web::Json<CreateSkillRequest>,
) -> Result<HttpResponse, StoreError> {
    req.validate()?;

    let skill = state.db.create_skill(query.user_id, &req).await?;
    Ok(HttpResponse::Created().json(skill))
}

/// Get a skill with its associated users
///
/// GET /api/skills/{id}
async fn get_skill(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let detail = state.db.get_skill_detail(*id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Update a skill
///
/// PUT /api/skills/{id}
async fn update_skill(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    req: web::Json<UpdateSkillRequest>,
) -> Result<HttpResponse, StoreError> {
    req.validate()?;

    let skill = state.db.update_skill(*id, &req).await?;
    Ok(HttpResponse::Ok().json(skill))
}

/// Delete a skill
///
/// DELETE /api/skills/{id}
async fn delete_skill(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    state.db.delete_skill(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Find complementary postings for a skill
///
/// GET /api/skills/{id}/matches
async fn find_matches(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let matches = state.db.find_skill_matches(*id).await?;
    Ok(HttpResponse::Ok().json(matches))
}
