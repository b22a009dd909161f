// Create event form submission.
//
// Runs the draft through the submission pipeline. On commit the event is
// inserted and its creator marked as organizer, then the caller is sent to the
// dashboard. An event whose organizer cannot be recorded is removed again.

use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::draft::EventDraft;
use crate::modules::events::core::event::Event;
use crate::modules::registrations::adapters::outbound::membership_repository::MembershipRepository;
use crate::modules::registrations::tracker::RegistrationTracker;
use crate::shared::core::errors::DomainError;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::navigation::Route;
use crate::shared::infrastructure::submission::{Outcome, Submission, SubmissionPipeline};
use std::sync::Arc;

pub struct CreateEventHandler<TEvents, TMemberships>
where
    TEvents: EventRepository + 'static,
    TMemberships: MembershipRepository + 'static,
{
    events: Arc<TEvents>,
    tracker: Arc<RegistrationTracker<TEvents, TMemberships>>,
    pipeline: SubmissionPipeline,
}

impl<TEvents, TMemberships> CreateEventHandler<TEvents, TMemberships>
where
    TEvents: EventRepository + 'static,
    TMemberships: MembershipRepository + 'static,
{
    pub fn new(
        events: Arc<TEvents>,
        tracker: Arc<RegistrationTracker<TEvents, TMemberships>>,
        pipeline: SubmissionPipeline,
    ) -> Self {
        Self {
            events,
            tracker,
            pipeline,
        }
    }

    pub async fn handle(&self, user_id: &UserId, draft: EventDraft) -> Outcome<Event> {
        self.handle_in(self.pipeline.start(), user_id, draft).await
    }

    /// Same as [`Self::handle`] on a submission the caller already observes.
    pub async fn handle_in(
        &self,
        submission: Submission,
        user_id: &UserId,
        draft: EventDraft,
    ) -> Outcome<Event> {
        submission
            .submit(
                draft,
                EventDraft::validate,
                move |draft| async move {
                    let event = self.events.insert(draft).await?;
                    if let Err(error) = self.tracker.mark_organizing(user_id, event.id).await {
                        tracing::warn!(%user_id, event_id = %event.id, %error, "organizer not recorded, removing event");
                        if let Err(cleanup) = self.events.remove(event.id).await {
                            tracing::error!(event_id = %event.id, error = %cleanup, "failed to remove ownerless event");
                        }
                        return Err(error);
                    }
                    tracing::info!(%user_id, event_id = %event.id, title = %event.title, "event created");
                    Ok::<_, DomainError>(event)
                },
                Route::dashboard(),
            )
            .await
    }
}
