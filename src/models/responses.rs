use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::matching::MatchRole;
use crate::models::domain::{Exchange, Review, Skill, User};

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Exchange with its two parties and the skill hydrated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeDetail {
    #[serde(flatten)]
    pub exchange: Exchange,
    pub sender: User,
    pub receiver: User,
    pub skill: Skill,
}

/// Review with both users hydrated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDetail {
    #[serde(flatten)]
    pub review: Review,
    pub reviewer: User,
    pub reviewed: User,
}

/// Skill with its associated users hydrated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDetail {
    #[serde(flatten)]
    pub skill: Skill,
    pub users: Vec<User>,
}

/// One complementary skill found for a source skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    #[serde(rename = "type")]
    pub role: MatchRole,
    pub skill: Skill,
    pub users: Vec<User>,
}

/// Response for the skill matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatchesResponse {
    pub skill: Skill,
    pub matches_count: usize,
    pub matches: Vec<SkillMatch>,
}

/// Aggregated rating for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRating {
    pub user_id: i32,
    pub average_rating: f64,
    pub total_reviews: i64,
}

/// One row of the top-skills statistic
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TopSkillRow {
    pub skill: String,
    pub exchanges_count: i64,
}

/// One row of the active-users statistic
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActiveUserRow {
    pub username: String,
    pub exchanges_count: i64,
}

/// Completed/total exchange ratio as a percentage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessRate {
    pub success_rate: f64,
}

/// Metadata of an uploaded photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoResponse {
    pub filename: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}
