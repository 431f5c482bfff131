use thiserror::Error;

use crate::models::domain::{Exchange, ExchangeStatus};

/// Reasons a requested status transition is denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("only the receiver can accept or reject an exchange")]
    NotReceiver,

    #[error("only a participant of the exchange can perform this transition")]
    NotParticipant,

    #[error("cannot move an exchange from '{from}' to '{to}'")]
    InvalidTransition {
        from: ExchangeStatus,
        to: ExchangeStatus,
    },
}

/// Decide whether `actor` may move `exchange` to `target`
///
/// The exchange lifecycle is a strict state machine:
///
/// ```text
/// pending  -> accepted   (receiver only)
/// pending  -> rejected   (receiver only)
/// pending  -> cancelled  (either participant)
/// accepted -> completed  (either participant)
/// accepted -> cancelled  (either participant)
/// ```
///
/// Every other edge is invalid, including any move out of a terminal state
/// and any move back to `pending`. Authorization is checked before the edge:
/// a non-receiver asking for `accepted` is told about the authorization
/// failure even when the edge itself would also be invalid. On denial the
/// stored status must stay unchanged; this function never mutates anything.
pub fn authorize_transition(
    exchange: &Exchange,
    target: ExchangeStatus,
    actor: i32,
) -> Result<(), TransitionError> {
    use ExchangeStatus::*;

    let invalid = || TransitionError::InvalidTransition {
        from: exchange.status,
        to: target,
    };

    match target {
        Accepted | Rejected => {
            // Only the receiver decides on a proposal.
            if actor != exchange.receiver_id {
                return Err(TransitionError::NotReceiver);
            }
            if exchange.status != Pending {
                return Err(invalid());
            }
            Ok(())
        }
        Cancelled => {
            if !exchange.is_participant(actor) {
                return Err(TransitionError::NotParticipant);
            }
            if !matches!(exchange.status, Pending | Accepted) {
                return Err(invalid());
            }
            Ok(())
        }
        Completed => {
            if !exchange.is_participant(actor) {
                return Err(TransitionError::NotParticipant);
            }
            if exchange.status != Accepted {
                return Err(invalid());
            }
            Ok(())
        }
        // No edge leads back to pending.
        Pending => Err(invalid()),
    }
}
