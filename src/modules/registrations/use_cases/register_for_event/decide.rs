use crate::modules::events::core::event::Event;
use crate::modules::registrations::core::decision::Decision;
use crate::modules::registrations::core::events::MembershipEvent;
use crate::modules::registrations::core::state::RegistrationState;
use crate::shared::core::errors::{DomainError, ValidationError};
use chrono::NaiveDate;

/// Capacity is checked here against the snapshot and again by the store when
/// the seat is reserved.
pub fn decide_register(state: RegistrationState, event: &Event, today: NaiveDate) -> Decision {
    match state {
        RegistrationState::None => {
            if event.has_ended(today) {
                return Decision::Rejected {
                    reason: ValidationError::EventEnded(event.id).into(),
                };
            }
            if event.is_full() {
                return Decision::Rejected {
                    reason: DomainError::CapacityExceeded(event.id),
                };
            }
            Decision::Accepted {
                events: vec![MembershipEvent::Registered { event_id: event.id }],
            }
        }
        RegistrationState::Registered | RegistrationState::Organizing | RegistrationState::Past => {
            Decision::unchanged()
        }
    }
}
