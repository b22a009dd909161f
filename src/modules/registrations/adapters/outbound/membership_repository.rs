// Membership store port.
//
// One record per (user, event). Saving `Membership::None` deletes the record,
// so an absent record and `None` are indistinguishable to callers.

use crate::modules::registrations::core::state::Membership;
use crate::shared::core::errors::DomainError;
use crate::shared::core::primitives::{EventId, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn load(&self, user_id: &UserId, event_id: EventId) -> Result<Membership, DomainError>;

    async fn save(
        &self,
        user_id: &UserId,
        event_id: EventId,
        membership: Membership,
    ) -> Result<(), DomainError>;

    /// Every non-empty membership of `user_id`, in no particular order.
    async fn list_by_user(&self, user_id: &UserId)
    -> Result<Vec<(EventId, Membership)>, DomainError>;

    /// Drop the memberships of every user for `event_id`.
    async fn clear_event(&self, event_id: EventId) -> Result<(), DomainError>;
}
