use thiserror::Error;

use crate::models::domain::{Exchange, ExchangeStatus};

/// Reasons a review cannot be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("reviews can only be left on completed exchanges")]
    NotCompleted,

    #[error("only a participant of the exchange can review it")]
    NotParticipant,

    #[error("this participant has already reviewed the exchange")]
    AlreadyReviewed,
}

/// Check whether `reviewer` may review `exchange` and derive the reviewed party
///
/// Preconditions, checked in order: the exchange must be completed, and the
/// reviewer must be one of its two parties. On success the id of the other
/// participant is returned; the reviewed party is never supplied by the
/// caller, so a reviewer cannot name an arbitrary target. The remaining
/// precondition, that no prior review exists for this (exchange, reviewer)
/// pair, is enforced by the store's unique constraint and surfaces as
/// [`ReviewError::AlreadyReviewed`].
pub fn check_eligibility(exchange: &Exchange, reviewer: i32) -> Result<i32, ReviewError> {
    if exchange.status != ExchangeStatus::Completed {
        return Err(ReviewError::NotCompleted);
    }

    exchange
        .other_participant(reviewer)
        .ok_or(ReviewError::NotParticipant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn exchange_in(status: ExchangeStatus) -> Exchange {
        Exchange {
            id: 3,
            sender_id: 1,
            receiver_id: 2,
            skill_id: 5,
            message: None,
            status,
            hours_proposed: 2,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_reviewed_party_is_the_other_participant() {
        let ex = exchange_in(ExchangeStatus::Completed);
        assert_eq!(check_eligibility(&ex, 1), Ok(2));
        assert_eq!(check_eligibility(&ex, 2), Ok(1));
    }

    #[test]
    fn test_non_participant_rejected() {
        let ex = exchange_in(ExchangeStatus::Completed);
        assert_eq!(check_eligibility(&ex, 42), Err(ReviewError::NotParticipant));
    }

    #[test]
    fn test_only_completed_exchanges_reviewable() {
        for status in [
            ExchangeStatus::Pending,
            ExchangeStatus::Accepted,
            ExchangeStatus::Rejected,
            ExchangeStatus::Cancelled,
        ] {
            let ex = exchange_in(status);
            assert_eq!(check_eligibility(&ex, 1), Err(ReviewError::NotCompleted));
        }
    }

    #[test]
    fn test_completed_check_precedes_participant_check() {
        // An outsider reviewing a pending exchange hears about the state
        // first, mirroring the check order of the creation path.
        let ex = exchange_in(ExchangeStatus::Pending);
        assert_eq!(check_eligibility(&ex, 42), Err(ReviewError::NotCompleted));
    }
}
