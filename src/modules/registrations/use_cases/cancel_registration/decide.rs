use crate::modules::registrations::core::decision::Decision;
use crate::modules::registrations::core::events::MembershipEvent;
use crate::modules::registrations::core::state::RegistrationState;
use crate::shared::core::primitives::EventId;

/// Only a live registration can be cancelled. Anything else is left alone.
pub fn decide_cancel(state: RegistrationState, event_id: EventId) -> Decision {
    match state {
        RegistrationState::Registered => Decision::Accepted {
            events: vec![MembershipEvent::RegistrationCancelled { event_id }],
        },
        _ => Decision::unchanged(),
    }
}
