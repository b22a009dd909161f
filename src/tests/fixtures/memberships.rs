use crate::modules::registrations::adapters::outbound::membership_repository::MembershipRepository;
use crate::modules::registrations::adapters::outbound::membership_repository_in_memory::InMemoryMembershipRepository;
use crate::modules::registrations::core::state::Membership;
use crate::shared::core::errors::DomainError;
use crate::shared::core::primitives::{EventId, UserId};
use std::sync::atomic::{AtomicBool, Ordering};

/// In memory memberships whose writes can be switched to fail while reads
/// keep working.
#[derive(Default)]
pub struct FlakyMembershipRepository {
    inner: InMemoryMembershipRepository,
    failing_writes: AtomicBool,
}

impl FlakyMembershipRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing_writes.store(failing, Ordering::SeqCst);
    }

    fn ensure_writable(&self) -> Result<(), DomainError> {
        if self.failing_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Backend("write failed".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MembershipRepository for FlakyMembershipRepository {
    async fn load(&self, user_id: &UserId, event_id: EventId) -> Result<Membership, DomainError> {
        self.inner.load(user_id, event_id).await
    }

    async fn save(
        &self,
        user_id: &UserId,
        event_id: EventId,
        membership: Membership,
    ) -> Result<(), DomainError> {
        self.ensure_writable()?;
        self.inner.save(user_id, event_id, membership).await
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<(EventId, Membership)>, DomainError> {
        self.inner.list_by_user(user_id).await
    }

    async fn clear_event(&self, event_id: EventId) -> Result<(), DomainError> {
        self.ensure_writable()?;
        self.inner.clear_event(event_id).await
    }
}
