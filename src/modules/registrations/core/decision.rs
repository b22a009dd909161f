use crate::modules::registrations::core::events::MembershipEvent;
use crate::shared::core::errors::DomainError;

/// Result of a pure decide function. An empty `Accepted` is a no-op.
#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<MembershipEvent> },
    Rejected { reason: DomainError },
}

impl Decision {
    pub fn unchanged() -> Self {
        Decision::Accepted { events: Vec::new() }
    }
}
