// Route exports
pub mod categories;
pub mod exchanges;
pub mod health;
pub mod photos;
pub mod reviews;
pub mod skills;
pub mod stats;
pub mod users;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::core::{ReviewError, TransitionError};
use crate::models::ErrorResponse;
use crate::services::{Database, PhotoError, PhotoStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub photos: Arc<PhotoStore>,
}

/// Configure all routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .configure(users::configure)
                .configure(skills::configure)
                .configure(exchanges::configure)
                .configure(reviews::configure)
                .configure(categories::configure)
                .configure(stats::configure)
                .configure(photos::configure),
        );
}

fn envelope(status: StatusCode, tag: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: tag.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

impl StoreError {
    /// Short machine-readable tag carried in the error envelope
    fn tag(&self) -> &'static str {
        match self {
            StoreError::Database(_) | StoreError::Migration(_) => "database_error",
            StoreError::NotFound { .. } => "not_found",
            StoreError::InvalidInput(_) => "invalid_input",
            StoreError::Payload(_) => "validation_failed",
            StoreError::Duplicate { .. } => "duplicate",
            StoreError::Conflict(_) => "conflict",
            StoreError::Transition(TransitionError::InvalidTransition { .. }) => {
                "invalid_transition"
            }
            StoreError::Transition(_) => "not_authorized",
            StoreError::Review(ReviewError::NotParticipant) => "not_authorized",
            StoreError::Review(_) => "review_rejected",
        }
    }
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Database(_) | StoreError::Migration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::InvalidInput(_) | StoreError::Payload(_) => StatusCode::BAD_REQUEST,
            StoreError::Duplicate { .. } | StoreError::Conflict(_) => StatusCode::CONFLICT,
            StoreError::Transition(TransitionError::InvalidTransition { .. }) => {
                StatusCode::CONFLICT
            }
            StoreError::Transition(_) => StatusCode::FORBIDDEN,
            StoreError::Review(ReviewError::NotParticipant) => StatusCode::FORBIDDEN,
            StoreError::Review(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Storage failures are logged server-side; clients get no internals.
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            "internal error".to_string()
        } else {
            self.to_string()
        };
        envelope(status, self.tag(), message)
    }
}

impl ResponseError for PhotoError {
    fn status_code(&self) -> StatusCode {
        match self {
            PhotoError::UnsupportedType
            | PhotoError::TooLarge
            | PhotoError::MissingFile
            | PhotoError::Upload(_) => StatusCode::BAD_REQUEST,
            PhotoError::NotFound(_) => StatusCode::NOT_FOUND,
            PhotoError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!("Photo request failed: {}", self);
            "internal error".to_string()
        } else {
            self.to_string()
        };
        let tag = match self {
            PhotoError::UnsupportedType => "unsupported_media_type",
            PhotoError::TooLarge => "payload_too_large",
            PhotoError::MissingFile => "missing_file",
            PhotoError::Upload(_) => "upload_failed",
            PhotoError::NotFound(_) => "not_found",
            PhotoError::Io(_) => "storage_error",
        };
        envelope(status, tag, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::ExchangeStatus;

    #[test]
    fn test_store_error_status_codes() {
        let cases = [
            (
                StoreError::NotFound {
                    entity: "user",
                    id: 9,
                },
                StatusCode::NOT_FOUND,
            ),
            (
                StoreError::InvalidInput("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                StoreError::Duplicate { field: "username" },
                StatusCode::CONFLICT,
            ),
            (
                StoreError::Conflict("referenced".into()),
                StatusCode::CONFLICT,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected, "{err}");
        }
    }

    #[test]
    fn test_transition_errors_split_by_cause() {
        let denied = StoreError::Transition(TransitionError::NotReceiver);
        assert_eq!(denied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(denied.tag(), "not_authorized");

        let invalid = StoreError::Transition(TransitionError::InvalidTransition {
            from: ExchangeStatus::Completed,
            to: ExchangeStatus::Cancelled,
        });
        assert_eq!(invalid.status_code(), StatusCode::CONFLICT);
        assert_eq!(invalid.tag(), "invalid_transition");
    }

    #[test]
    fn test_review_errors_split_by_cause() {
        let denied = StoreError::Review(ReviewError::NotParticipant);
        assert_eq!(denied.status_code(), StatusCode::FORBIDDEN);

        for err in [ReviewError::NotCompleted, ReviewError::AlreadyReviewed] {
            assert_eq!(StoreError::Review(err).status_code(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_photo_error_status_codes() {
        assert_eq!(
            PhotoError::UnsupportedType.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PhotoError::TooLarge.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            PhotoError::NotFound("x.jpg".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
