use crate::shared::core::primitives::{EventId, UserId};
use thiserror::Error;

/// Malformed or missing input. Always raised before any state is touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,

    #[error("category is required")]
    MissingCategory,

    #[error("date is required")]
    MissingDate,

    #[error("start time is required")]
    MissingStartTime,

    #[error("end time is required")]
    MissingEndTime,

    #[error("location is required")]
    MissingLocation,

    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("event {0} has already taken place")]
    EventEnded(EventId),

    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("email address is malformed")]
    MalformedEmail,

    #[error("password is required")]
    MissingPassword,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("event {0} not found")]
    NotFound(EventId),

    #[error("event {0} is at capacity")]
    CapacityExceeded(EventId),

    #[error("event {0} already exists")]
    DuplicateEvent(EventId),

    #[error("user {user_id} may not manage event {event_id}")]
    PermissionDenied { user_id: UserId, event_id: EventId },

    #[error("backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod domain_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_wrap_validation_errors() {
        let error: DomainError = ValidationError::MissingTitle.into();
        assert_eq!(error, DomainError::Validation(ValidationError::MissingTitle));
        assert_eq!(error.to_string(), "validation failed: title is required");
    }

    #[rstest]
    fn it_should_name_the_user_and_event_when_permission_is_denied() {
        let error = DomainError::PermissionDenied {
            user_id: UserId::new("user-0002"),
            event_id: EventId::new(1),
        };
        assert_eq!(error.to_string(), "user user-0002 may not manage event 1");
    }
}
