use crate::modules::registrations::core::decision::Decision;
use crate::modules::registrations::core::events::MembershipEvent;
use crate::modules::registrations::core::state::Membership;
use crate::shared::core::errors::DomainError;
use crate::shared::core::primitives::{EventId, UserId};

/// Ownership is the stored membership; an organizer can delete an event that
/// has already taken place.
pub fn decide_delete_owned(membership: Membership, user_id: &UserId, event_id: EventId) -> Decision {
    match membership {
        Membership::Organizing => Decision::Accepted {
            events: vec![MembershipEvent::OwnedEventDeleted { event_id }],
        },
        Membership::None | Membership::Registered => Decision::Rejected {
            reason: DomainError::PermissionDenied {
                user_id: user_id.clone(),
                event_id,
            },
        },
    }
}
