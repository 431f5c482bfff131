//! SkillSwap API - skill exchange marketplace service
//!
//! This library backs the SkillSwap HTTP API: users post skills they can
//! teach or want to learn, negotiate exchanges through a small status
//! lifecycle, and review each other once an exchange completes.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use core::{authorize_transition, check_eligibility, classify, MatchRole};
pub use models::{Category, Exchange, ExchangeStatus, Review, Skill, SkillCategory, SkillLevel, User};
pub use services::{Database, PhotoStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert!(ExchangeStatus::Completed.is_terminal());
        assert!(!ExchangeStatus::Pending.is_terminal());
    }
}
