use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::facet::QueryFacet;
use crate::modules::events::core::filter::filter;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::DomainError;
use std::sync::Arc;

pub struct BrowseEventsHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    events: Arc<TEvents>,
    clock: Arc<dyn Clock>,
}

impl<TEvents> BrowseEventsHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, clock: Arc<dyn Clock>) -> Self {
        Self { events, clock }
    }

    pub async fn handle(&self, facet: &QueryFacet) -> Result<Vec<Event>, DomainError> {
        let events = self.events.list().await?;
        let found = filter(&events, facet, self.clock.today());
        tracing::debug!(
            text = %facet.text,
            window = ?facet.time_window,
            total = events.len(),
            found = found.len(),
            "events filtered"
        );
        Ok(found)
    }
}
