// Registration State Tracker.
//
// Purpose
// - Own the per (user, event) membership and keep the event's attendee_count in
//   step with it.
//
// Flow per mutation
// - Take the write gate, load the event and the stored membership.
// - Derive the visible state and run the pure decide function.
// - For each accepted fact: apply its effect on the event store, fold it into
//   the membership, persist.
// - When persisting fails the store effect is undone before the error is
//   returned, so seats and memberships never drift apart.
//
// Every mutation holds the gate until its effects are persisted, so two calls
// can never interleave between the capacity check and the seat reservation.

use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::registrations::adapters::outbound::membership_repository::MembershipRepository;
use crate::modules::registrations::core::decision::Decision;
use crate::modules::registrations::core::events::MembershipEvent;
use crate::modules::registrations::core::evolve::evolve;
use crate::modules::registrations::core::state::{Membership, RegistrationState};
use crate::modules::registrations::use_cases::cancel_registration::decide::decide_cancel;
use crate::modules::registrations::use_cases::delete_owned_event::decide::decide_delete_owned;
use crate::modules::registrations::use_cases::mark_organizing::decide::decide_mark_organizing;
use crate::modules::registrations::use_cases::register_for_event::decide::decide_register;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::DomainError;
use crate::shared::core::primitives::{EventId, UserId};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct RegistrationTracker<TEvents, TMemberships>
where
    TEvents: EventRepository + 'static,
    TMemberships: MembershipRepository + 'static,
{
    events: Arc<TEvents>,
    memberships: Arc<TMemberships>,
    clock: Arc<dyn Clock>,
    writes: Mutex<()>,
}

impl<TEvents, TMemberships> RegistrationTracker<TEvents, TMemberships>
where
    TEvents: EventRepository + 'static,
    TMemberships: MembershipRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, memberships: Arc<TMemberships>, clock: Arc<dyn Clock>) -> Self {
        Self {
            events,
            memberships,
            clock,
            writes: Mutex::new(()),
        }
    }

    pub async fn state_of(
        &self,
        user_id: &UserId,
        event_id: EventId,
    ) -> Result<RegistrationState, DomainError> {
        let event = self.find(event_id).await?;
        let membership = self.memberships.load(user_id, event_id).await?;
        Ok(RegistrationState::derive(
            membership,
            event.as_ref(),
            self.clock.today(),
        ))
    }

    pub async fn register(
        &self,
        user_id: &UserId,
        event_id: EventId,
    ) -> Result<RegistrationState, DomainError> {
        let _gate = self.writes.lock().await;
        let event = self.events.get(event_id).await?;
        let membership = self.memberships.load(user_id, event_id).await?;
        let today = self.clock.today();
        let state = RegistrationState::derive(membership, Some(&event), today);

        let decision = decide_register(state, &event, today);
        let membership = self.apply(user_id, event_id, membership, decision).await?;
        Ok(RegistrationState::derive(membership, Some(&event), today))
    }

    /// Unknown events and non-registered users are left untouched.
    pub async fn cancel(
        &self,
        user_id: &UserId,
        event_id: EventId,
    ) -> Result<RegistrationState, DomainError> {
        let _gate = self.writes.lock().await;
        let event = self.find(event_id).await?;
        let membership = self.memberships.load(user_id, event_id).await?;
        let today = self.clock.today();
        let state = RegistrationState::derive(membership, event.as_ref(), today);

        let decision = decide_cancel(state, event_id);
        let membership = self.apply(user_id, event_id, membership, decision).await?;
        Ok(RegistrationState::derive(membership, event.as_ref(), today))
    }

    pub async fn mark_organizing(
        &self,
        user_id: &UserId,
        event_id: EventId,
    ) -> Result<RegistrationState, DomainError> {
        let _gate = self.writes.lock().await;
        let event = self.events.get(event_id).await?;
        let membership = self.memberships.load(user_id, event_id).await?;

        let decision = decide_mark_organizing(membership, event_id);
        let membership = self.apply(user_id, event_id, membership, decision).await?;
        Ok(RegistrationState::derive(
            membership,
            Some(&event),
            self.clock.today(),
        ))
    }

    pub async fn delete_owned(&self, user_id: &UserId, event_id: EventId) -> Result<(), DomainError> {
        let _gate = self.writes.lock().await;
        let membership = self.memberships.load(user_id, event_id).await?;

        let decision = decide_delete_owned(membership, user_id, event_id);
        self.apply(user_id, event_id, membership, decision).await?;
        Ok(())
    }

    async fn find(&self, event_id: EventId) -> Result<Option<Event>, DomainError> {
        match self.events.get(event_id).await {
            Ok(event) => Ok(Some(event)),
            Err(DomainError::NotFound(_)) => Ok(None),
            Err(error) => Err(error),
        }
    }

    async fn apply(
        &self,
        user_id: &UserId,
        event_id: EventId,
        mut membership: Membership,
        decision: Decision,
    ) -> Result<Membership, DomainError> {
        let facts = match decision {
            Decision::Accepted { events } => events,
            Decision::Rejected { reason } => {
                tracing::warn!(%user_id, %event_id, %reason, "membership change rejected");
                return Err(reason);
            }
        };

        for fact in facts {
            let undo = self.apply_effect(fact).await?;
            let next = evolve(membership, fact);
            if let Err(error) = self.persist(user_id, event_id, fact, next).await {
                tracing::warn!(%user_id, %event_id, ?fact, %error, "membership not persisted, undoing");
                self.undo(undo).await;
                return Err(error);
            }
            membership = next;
            tracing::info!(%user_id, %event_id, ?fact, ?membership, "membership changed");
        }
        Ok(membership)
    }

    async fn apply_effect(&self, fact: MembershipEvent) -> Result<Undo, DomainError> {
        match fact {
            MembershipEvent::Registered { event_id } => {
                self.events.reserve_seat(event_id).await?;
                Ok(Undo::ReleaseSeat(event_id))
            }
            MembershipEvent::RegistrationCancelled { event_id } => {
                self.events.release_seat(event_id).await?;
                Ok(Undo::ReserveSeat(event_id))
            }
            MembershipEvent::OrganizingMarked { .. } => Ok(Undo::Nothing),
            MembershipEvent::OwnedEventDeleted { event_id } => {
                let removed = self.find(event_id).await?;
                self.events.remove(event_id).await?;
                Ok(removed.map_or(Undo::Nothing, Undo::Restore))
            }
        }
    }

    /// Deleting an event drops every membership on it, the owner's included.
    async fn persist(
        &self,
        user_id: &UserId,
        event_id: EventId,
        fact: MembershipEvent,
        membership: Membership,
    ) -> Result<(), DomainError> {
        match fact {
            MembershipEvent::OwnedEventDeleted { .. } => self.memberships.clear_event(event_id).await,
            _ => self.memberships.save(user_id, event_id, membership).await,
        }
    }

    async fn undo(&self, undo: Undo) {
        let result = match undo {
            Undo::ReleaseSeat(event_id) => self.events.release_seat(event_id).await,
            Undo::ReserveSeat(event_id) => self.events.reserve_seat(event_id).await.map(|_| ()),
            Undo::Restore(event) => self.events.restore(event).await,
            Undo::Nothing => Ok(()),
        };
        if let Err(error) = result {
            tracing::error!(%error, "failed to undo event store change");
        }
    }
}

/// Inverse of a store effect, run when the membership write that should follow
/// it fails.
enum Undo {
    ReleaseSeat(EventId),
    ReserveSeat(EventId),
    Restore(Event),
    Nothing,
}
