use crate::modules::registrations::core::events::MembershipEvent;
use crate::modules::registrations::core::state::Membership;

pub fn evolve(_state: Membership, event: MembershipEvent) -> Membership {
    match event {
        MembershipEvent::Registered { .. } => Membership::Registered,
        MembershipEvent::OrganizingMarked { .. } => Membership::Organizing,
        MembershipEvent::RegistrationCancelled { .. }
        | MembershipEvent::OwnedEventDeleted { .. } => Membership::None,
    }
}
