use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{ExchangeStatus, SkillCategory, SkillLevel};

/// Request to register a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub full_name: Option<String>,
    pub bio: Option<String>,
    #[validate(length(max = 255))]
    pub avatar_url: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
}

/// Partial update of a user's profile fields
///
/// Absent (or null) fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 100))]
    pub full_name: Option<String>,
    pub bio: Option<String>,
    #[validate(length(max = 255))]
    pub avatar_url: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
}

/// Request to post a new skill
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_skill_intent"))]
pub struct CreateSkillRequest {
    #[validate(length(min = 3, max = 100))]
    pub title: String,
    #[validate(length(min = 10, max = 500))]
    pub description: String,
    pub category: SkillCategory,
    pub category_id: Option<i32>,
    pub level: SkillLevel,
    pub can_teach: bool,
    pub want_learn: bool,
}

/// A posting either offers to teach or asks to learn, never both.
fn validate_skill_intent(req: &CreateSkillRequest) -> Result<(), ValidationError> {
    if req.can_teach && req.want_learn {
        let mut err = ValidationError::new("teach_learn_conflict");
        err.message = Some("a skill cannot be offered to teach and asked to learn at once".into());
        return Err(err);
    }
    Ok(())
}

/// Partial update of a skill posting
///
/// The teach/learn rule is re-checked against the merged state by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 3, max = 100))]
    pub title: Option<String>,
    #[validate(length(min = 10, max = 500))]
    pub description: Option<String>,
    pub category: Option<SkillCategory>,
    pub category_id: Option<i32>,
    pub level: Option<SkillLevel>,
    pub can_teach: Option<bool>,
    pub want_learn: Option<bool>,
}

/// Request to propose an exchange
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExchangeRequest {
    pub receiver_id: i32,
    pub skill_id: i32,
    #[validate(length(max = 500))]
    pub message: Option<String>,
    #[serde(default = "default_hours")]
    #[validate(range(min = 1, max = 10))]
    pub hours_proposed: i32,
}

fn default_hours() -> i32 {
    1
}

/// Status transition request for an exchange
///
/// The optional message replaces the stored one when present.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateExchangeRequest {
    pub status: ExchangeStatus,
    #[validate(length(max = 500))]
    pub message: Option<String>,
}

/// Request to review a completed exchange
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub exchange_id: i32,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(length(max = 1000))]
    pub comment: Option<String>,
}

/// Category name payload, shared by create and rename
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Plain skip/limit pagination
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

/// Filters for the skill listing
#[derive(Debug, Clone, Deserialize)]
pub struct ListSkillsQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub category: Option<SkillCategory>,
    pub can_teach: Option<bool>,
    pub want_learn: Option<bool>,
    pub search: Option<String>,
}

/// Filters for the exchange listing
#[derive(Debug, Clone, Deserialize)]
pub struct ListExchangesQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub status_filter: Option<ExchangeStatus>,
    pub user_id: Option<i32>,
}

/// Filters for the review listing
#[derive(Debug, Clone, Deserialize)]
pub struct ListReviewsQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub user_id: Option<i32>,
}

// Acting-user query parameters. These default to user 1 until authentication
// is integrated; the id would then come from the verified token instead.

/// Acting user for skill creation and the my/sent, my/received listings
#[derive(Debug, Clone, Deserialize)]
pub struct ActingUserQuery {
    #[serde(default = "default_acting_user")]
    pub user_id: i32,
}

/// Acting sender for exchange creation
#[derive(Debug, Clone, Deserialize)]
pub struct SenderQuery {
    #[serde(default = "default_acting_user")]
    pub sender_id: i32,
}

/// Acting user for exchange status transitions
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUserQuery {
    #[serde(default = "default_acting_user")]
    pub current_user_id: i32,
}

/// Acting reviewer for review creation
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewerQuery {
    #[serde(default = "default_acting_user")]
    pub reviewer_id: i32,
}

fn default_acting_user() -> i32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill_request(can_teach: bool, want_learn: bool) -> CreateSkillRequest {
        CreateSkillRequest {
            title: "Guitar lessons".to_string(),
            description: "Acoustic guitar from scratch".to_string(),
            category: SkillCategory::Music,
            category_id: None,
            level: SkillLevel::Intermediate,
            can_teach,
            want_learn,
        }
    }

    #[test]
    fn test_skill_intent_conflict_rejected() {
        assert!(skill_request(true, false).validate().is_ok());
        assert!(skill_request(false, true).validate().is_ok());
        assert!(skill_request(false, false).validate().is_ok());
        assert!(skill_request(true, true).validate().is_err());
    }

    #[test]
    fn test_skill_title_bounds() {
        let mut req = skill_request(true, false);
        req.title = "ab".to_string();
        assert!(req.validate().is_err());

        req.title = "a".repeat(101);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_review_rating_bounds() {
        let mut req = CreateReviewRequest {
            exchange_id: 1,
            rating: 5,
            comment: None,
        };
        assert!(req.validate().is_ok());

        req.rating = 0;
        assert!(req.validate().is_err());

        req.rating = 6;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_exchange_hours_bounds_and_default() {
        let req: CreateExchangeRequest =
            serde_json::from_str(r#"{"receiver_id": 2, "skill_id": 5}"#).unwrap();
        assert_eq!(req.hours_proposed, 1);
        assert!(req.validate().is_ok());

        let req: CreateExchangeRequest =
            serde_json::from_str(r#"{"receiver_id": 2, "skill_id": 5, "hours_proposed": 11}"#)
                .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_username_bounds() {
        let mut req = CreateUserRequest {
            username: "alex_dev".to_string(),
            email: "alex@example.com".to_string(),
            full_name: None,
            bio: None,
            avatar_url: None,
            phone: None,
            location: None,
        };
        assert!(req.validate().is_ok());

        req.username = "ab".to_string();
        assert!(req.validate().is_err());

        req.username = "alex_dev".to_string();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_pagination_defaults() {
        let q: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.skip, 0);
        assert_eq!(q.limit, 100);
    }
}
