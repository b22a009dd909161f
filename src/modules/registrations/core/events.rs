use crate::shared::core::primitives::EventId;
use serde::{Deserialize, Serialize};

/// Facts decided for one (user, event) membership. Each one has an effect on
/// the event store as well, applied by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MembershipEvent {
    Registered { event_id: EventId },
    RegistrationCancelled { event_id: EventId },
    OrganizingMarked { event_id: EventId },
    OwnedEventDeleted { event_id: EventId },
}
