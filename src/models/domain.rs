use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proficiency level of a skill posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Category a skill belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Programming,
    Music,
    Sports,
    Languages,
    Art,
    Science,
    Cooking,
    Other,
}

/// Lifecycle state of an exchange request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "exchange_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExchangeStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl ExchangeStatus {
    /// Whether no further transitions are possible from this state
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for ExchangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        })
    }
}

/// Registered marketplace user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Skill posting a user offers to teach or asks to learn
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: SkillCategory,
    pub category_id: Option<i32>,
    pub level: SkillLevel,
    pub can_teach: bool,
    pub want_learn: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Proposed trade of teaching/learning time between two users over one skill
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exchange {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub skill_id: i32,
    pub message: Option<String>,
    pub status: ExchangeStatus,
    pub hours_proposed: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Exchange {
    /// Whether the given user is the sender or the receiver
    pub fn is_participant(&self, user_id: i32) -> bool {
        user_id == self.sender_id || user_id == self.receiver_id
    }

    /// The participant on the other side of the exchange from `user_id`
    ///
    /// Returns `None` when `user_id` is not a participant at all.
    pub fn other_participant(&self, user_id: i32) -> Option<i32> {
        if user_id == self.sender_id {
            Some(self.receiver_id)
        } else if user_id == self.receiver_id {
            Some(self.sender_id)
        } else {
            None
        }
    }
}

/// Rating one exchange participant left about the other
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub exchange_id: i32,
    pub reviewer_id: i32,
    pub reviewed_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Named category skills can reference
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ExchangeStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let parsed: ExchangeStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, ExchangeStatus::Cancelled);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ExchangeStatus::Pending.is_terminal());
        assert!(!ExchangeStatus::Accepted.is_terminal());
        assert!(ExchangeStatus::Rejected.is_terminal());
        assert!(ExchangeStatus::Completed.is_terminal());
        assert!(ExchangeStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_other_participant() {
        let exchange = Exchange {
            id: 1,
            sender_id: 10,
            receiver_id: 20,
            skill_id: 5,
            message: None,
            status: ExchangeStatus::Pending,
            hours_proposed: 1,
            created_at: Utc::now(),
            updated_at: None,
        };

        assert_eq!(exchange.other_participant(10), Some(20));
        assert_eq!(exchange.other_participant(20), Some(10));
        assert_eq!(exchange.other_participant(99), None);
        assert!(exchange.is_participant(10));
        assert!(!exchange.is_participant(99));
    }
}
