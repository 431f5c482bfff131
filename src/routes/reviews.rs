use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{CreateReviewRequest, ListReviewsQuery, ReviewerQuery};
use crate::routes::AppState;
use crate::services::StoreError;

/// Configure review routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/reviews", web::get().to(list_reviews))
        .route("/reviews", web::post().to(create_review))
        .route("/reviews/user/{id}", web::get().to(user_reviews))
        .route("/reviews/user/{id}/rating", web::get().to(user_rating))
        .route("/reviews/{id}", web::get().to(get_review));
}

/// List reviews, optionally about one user
///
/// GET /api/reviews?user_id=2
async fn list_reviews(
    state: web::Data<AppState>,
    query: web::Query<ListReviewsQuery>,
) -> Result<HttpResponse, StoreError> {
    let reviews = state.db.list_reviews(&query).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// Review the other party of a completed exchange
///
/// POST /api/reviews?reviewer_id=1
async fn create_review(
    state: web::Data<AppState>,
    query: web::Query<ReviewerQuery>,
    req: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, StoreError> {
    req.validate()?;

    let review = state.db.create_review(query.reviewer_id, &req).await?;
    Ok(HttpResponse::Created().json(review))
}

/// Get a review with both users
///
/// GET /api/reviews/{id}
async fn get_review(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let detail = state.db.get_review_detail(*id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Reviews written about a user
///
/// GET /api/reviews/user/{id}
async fn user_reviews(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let reviews = state.db.user_reviews(*id).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// Aggregate rating for a user
///
/// GET /api/reviews/user/{id}/rating
async fn user_rating(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let rating = state.db.user_rating(*id).await?;
    Ok(HttpResponse::Ok().json(rating))
}
