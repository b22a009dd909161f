use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::registrations::adapters::outbound::membership_repository::MembershipRepository;
use crate::modules::registrations::core::state::RegistrationState;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::DomainError;
use crate::shared::core::primitives::UserId;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// The three tabs of the dashboard, each in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub organizing: Vec<Event>,
    pub registered: Vec<Event>,
    pub past: Vec<Event>,
}

pub struct DashboardQuery<TEvents, TMemberships>
where
    TEvents: EventRepository + 'static,
    TMemberships: MembershipRepository + 'static,
{
    events: Arc<TEvents>,
    memberships: Arc<TMemberships>,
    clock: Arc<dyn Clock>,
}

impl<TEvents, TMemberships> DashboardQuery<TEvents, TMemberships>
where
    TEvents: EventRepository + 'static,
    TMemberships: MembershipRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, memberships: Arc<TMemberships>, clock: Arc<dyn Clock>) -> Self {
        Self {
            events,
            memberships,
            clock,
        }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<DashboardView, DomainError> {
        let memberships: HashMap<_, _> = self
            .memberships
            .list_by_user(user_id)
            .await?
            .into_iter()
            .collect();
        let today = self.clock.today();

        let mut view = DashboardView::default();
        for event in self.events.list().await? {
            let Some(membership) = memberships.get(&event.id).copied() else {
                continue;
            };
            match RegistrationState::derive(membership, Some(&event), today) {
                RegistrationState::Organizing => view.organizing.push(event),
                RegistrationState::Registered => view.registered.push(event),
                RegistrationState::Past => view.past.push(event),
                RegistrationState::None => {}
            }
        }
        Ok(view)
    }
}
