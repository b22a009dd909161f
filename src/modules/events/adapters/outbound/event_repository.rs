// Event Record Store port.
//
// Purpose
// - Keep callers independent of where events live. The in memory adapter backs
//   the storefront today; a database adapter can replace it without touching
//   handlers.
//
// Contract
// - list: every event in insertion order.
// - get: NotFound when the id is unknown.
// - insert: validates the draft, assigns a fresh id, appends.
// - remove: idempotent, unknown ids are ignored.
// - restore: puts a removed event back under its own id and in its original
//   place. Used to undo a removal whose follow-up write failed.
// - reserve_seat / release_seat: the only way attendee_count changes. Both keep
//   the count inside [0, capacity] atomically.

use crate::modules::events::core::draft::EventDraft;
use crate::modules::events::core::event::Event;
use crate::shared::core::errors::DomainError;
use crate::shared::core::primitives::EventId;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, DomainError>;
    async fn get(&self, id: EventId) -> Result<Event, DomainError>;
    async fn insert(&self, draft: EventDraft) -> Result<Event, DomainError>;
    async fn remove(&self, id: EventId) -> Result<(), DomainError>;
    async fn restore(&self, event: Event) -> Result<(), DomainError>;
    async fn reserve_seat(&self, id: EventId) -> Result<Event, DomainError>;
    async fn release_seat(&self, id: EventId) -> Result<(), DomainError>;
}
