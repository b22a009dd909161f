// In memory implementation of the EventRepository port.
//
// Purpose
// - Back the storefront and the tests without a database.
//
// Responsibilities
// - Keep events in insertion order.
// - Hand out monotonically increasing ids, never reusing one after a removal.
// - Check and change seat counts under a single write lock.
// - Refuse seed data that breaks the event invariants.

use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::draft::EventDraft;
use crate::modules::events::core::event::Event;
use crate::shared::core::errors::{DomainError, ValidationError};
use crate::shared::core::primitives::EventId;
use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Default)]
struct Catalog {
    events: Vec<Event>,
    last_id: u64,
}

impl Catalog {
    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }
}

#[derive(Default)]
pub struct InMemoryEventRepository {
    inner: RwLock<Catalog>,
    is_offline: bool,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails on the first event with a reused id, more attendees than seats
    /// or an end time not after its start time.
    pub fn with_events(events: Vec<Event>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id) {
                return Err(DomainError::DuplicateEvent(event.id));
            }
            if event.attendee_count > event.capacity {
                return Err(DomainError::CapacityExceeded(event.id));
            }
            if event.end_time <= event.start_time {
                return Err(ValidationError::InvalidInterval.into());
            }
        }

        let last_id = events
            .iter()
            .map(|event| event.id.value())
            .max()
            .unwrap_or(0);
        Ok(Self {
            inner: RwLock::new(Catalog { events, last_id }),
            is_offline: false,
        })
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), DomainError> {
        if self.is_offline {
            return Err(DomainError::Backend("Event repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.events.clone())
    }

    async fn get(&self, id: EventId) -> Result<Event, DomainError> {
        self.ensure_online()?;
        self.inner
            .read()
            .await
            .events
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or(DomainError::NotFound(id))
    }

    async fn insert(&self, draft: EventDraft) -> Result<Event, DomainError> {
        self.ensure_online()?;
        let mut catalog = self.inner.write().await;
        let id = EventId::new(catalog.last_id + 1);
        let event = draft.into_event(id)?;
        catalog.last_id = id.value();
        catalog.events.push(event.clone());
        tracing::debug!(event_id = %id, title = %event.title, "event inserted");
        Ok(event)
    }

    async fn remove(&self, id: EventId) -> Result<(), DomainError> {
        self.ensure_online()?;
        self.inner.write().await.events.retain(|event| event.id != id);
        Ok(())
    }

    async fn restore(&self, event: Event) -> Result<(), DomainError> {
        self.ensure_online()?;
        let mut catalog = self.inner.write().await;
        if catalog.position(event.id).is_some() {
            return Err(DomainError::DuplicateEvent(event.id));
        }
        let index = catalog
            .events
            .partition_point(|stored| stored.id < event.id);
        catalog.last_id = catalog.last_id.max(event.id.value());
        tracing::debug!(event_id = %event.id, "event restored");
        catalog.events.insert(index, event);
        Ok(())
    }

    async fn reserve_seat(&self, id: EventId) -> Result<Event, DomainError> {
        self.ensure_online()?;
        let mut catalog = self.inner.write().await;
        let index = catalog.position(id).ok_or(DomainError::NotFound(id))?;
        let event = &mut catalog.events[index];
        if event.is_full() {
            return Err(DomainError::CapacityExceeded(id));
        }
        event.attendee_count += 1;
        Ok(event.clone())
    }

    async fn release_seat(&self, id: EventId) -> Result<(), DomainError> {
        self.ensure_online()?;
        let mut catalog = self.inner.write().await;
        if let Some(index) = catalog.position(id) {
            let event = &mut catalog.events[index];
            event.attendee_count = event.attendee_count.saturating_sub(1);
        }
        Ok(())
    }
}
