use crate::modules::registrations::adapters::outbound::membership_repository::MembershipRepository;
use crate::modules::registrations::core::state::Membership;
use crate::shared::core::errors::DomainError;
use crate::shared::core::primitives::{EventId, UserId};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMembershipRepository {
    records: RwLock<HashMap<(UserId, EventId), Membership>>,
    is_offline: bool,
}

impl InMemoryMembershipRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), DomainError> {
        if self.is_offline {
            return Err(DomainError::Backend("Membership repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn load(&self, user_id: &UserId, event_id: EventId) -> Result<Membership, DomainError> {
        self.ensure_online()?;
        let records = self.records.read().await;
        Ok(records
            .get(&(user_id.clone(), event_id))
            .copied()
            .unwrap_or_default())
    }

    async fn save(
        &self,
        user_id: &UserId,
        event_id: EventId,
        membership: Membership,
    ) -> Result<(), DomainError> {
        self.ensure_online()?;
        let mut records = self.records.write().await;
        let key = (user_id.clone(), event_id);
        match membership {
            Membership::None => {
                records.remove(&key);
            }
            membership => {
                records.insert(key, membership);
            }
        }
        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<(EventId, Membership)>, DomainError> {
        self.ensure_online()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|((owner, _), _)| owner == user_id)
            .map(|((_, event_id), membership)| (*event_id, *membership))
            .collect())
    }

    async fn clear_event(&self, event_id: EventId) -> Result<(), DomainError> {
        self.ensure_online()?;
        self.records
            .write()
            .await
            .retain(|(_, stored), _| *stored != event_id);
        Ok(())
    }
}
