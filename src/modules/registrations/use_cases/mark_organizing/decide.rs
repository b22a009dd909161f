use crate::modules::registrations::core::decision::Decision;
use crate::modules::registrations::core::events::MembershipEvent;
use crate::modules::registrations::core::state::Membership;
use crate::shared::core::primitives::EventId;

/// An attendee who becomes the organizer gives their seat back first.
pub fn decide_mark_organizing(membership: Membership, event_id: EventId) -> Decision {
    match membership {
        Membership::None => Decision::Accepted {
            events: vec![MembershipEvent::OrganizingMarked { event_id }],
        },
        Membership::Registered => Decision::Accepted {
            events: vec![
                MembershipEvent::RegistrationCancelled { event_id },
                MembershipEvent::OrganizingMarked { event_id },
            ],
        },
        Membership::Organizing => Decision::unchanged(),
    }
}
