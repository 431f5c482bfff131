use crate::core::{average_rating, check_eligibility, ReviewError};
use crate::models::domain::Review;
use crate::models::requests::{CreateReviewRequest, ListReviewsQuery};
use crate::models::responses::{ReviewDetail, UserRating};
use crate::services::db::{Database, StoreError};

impl Database {
    /// List reviews, optionally narrowed to those written about one user
    pub async fn list_reviews(&self, query: &ListReviewsQuery) -> Result<Vec<Review>, StoreError> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT * FROM reviews
            WHERE ($1::int IS NULL OR reviewed_id = $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query.user_id)
        .bind(i64::from(query.limit))
        .bind(i64::from(query.skip))
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    /// Get a review by id
    pub async fn get_review(&self, id: i32) -> Result<Review, StoreError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { entity: "review", id })
    }

    /// Get a review with both parties hydrated
    pub async fn get_review_detail(&self, id: i32) -> Result<ReviewDetail, StoreError> {
        let review = self.get_review(id).await?;
        let reviewer = self.get_user(review.reviewer_id).await?;
        let reviewed = self.get_user(review.reviewed_id).await?;

        Ok(ReviewDetail {
            review,
            reviewer,
            reviewed,
        })
    }

    /// Create a review of the other party in a completed exchange
    ///
    /// Eligibility is checked against the exchange first; the one-review-per
    /// -reviewer rule is enforced by the unique constraint so concurrent
    /// submissions cannot both land.
    pub async fn create_review(
        &self,
        reviewer_id: i32,
        req: &CreateReviewRequest,
    ) -> Result<Review, StoreError> {
        let exchange = self.get_exchange(req.exchange_id).await?;
        let reviewed_id = check_eligibility(&exchange, reviewer_id)?;

        let inserted = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (exchange_id, reviewer_id, reviewed_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (exchange_id, reviewer_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(req.exchange_id)
        .bind(reviewer_id)
        .bind(reviewed_id)
        .bind(req.rating)
        .bind(&req.comment)
        .fetch_optional(&self.pool)
        .await?;

        let review = inserted.ok_or(StoreError::Review(ReviewError::AlreadyReviewed))?;

        tracing::debug!(
            "Created review {} on exchange {} by user {}",
            review.id,
            review.exchange_id,
            review.reviewer_id
        );
        Ok(review)
    }

    /// Reviews written about a user, newest first
    pub async fn user_reviews(&self, user_id: i32) -> Result<Vec<Review>, StoreError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE reviewed_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    /// Aggregate rating for a user
    ///
    /// A user with no reviews reports an average of 0.0 rather than null.
    pub async fn user_rating(&self, user_id: i32) -> Result<UserRating, StoreError> {
        let (average, total) = sqlx::query_as::<_, (Option<f64>, i64)>(
            r#"
            SELECT AVG(rating)::float8 AS average_rating, COUNT(*) AS total_reviews
            FROM reviews
            WHERE reviewed_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(UserRating {
            user_id,
            average_rating: average_rating(average),
            total_reviews: total,
        })
    }
}
