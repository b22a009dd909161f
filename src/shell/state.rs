use crate::modules::accounts::use_cases::authenticate::handler::AuthenticationHandler;
use crate::modules::events::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use crate::modules::events::use_cases::browse_events::handler::BrowseEventsHandler;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::registrations::adapters::outbound::membership_repository_in_memory::InMemoryMembershipRepository;
use crate::modules::registrations::tracker::RegistrationTracker;
use crate::modules::registrations::use_cases::list_dashboard::handler::DashboardQuery;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::navigation::Navigator;
use crate::shared::infrastructure::submission::SubmissionPipeline;
use std::sync::Arc;
use std::time::Duration;

type Events = InMemoryEventRepository;
type Memberships = InMemoryMembershipRepository;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<Events>,
    pub browse_handler: Arc<BrowseEventsHandler<Events>>,
    pub create_handler: Arc<CreateEventHandler<Events, Memberships>>,
    pub tracker: Arc<RegistrationTracker<Events, Memberships>>,
    pub dashboard_query: Arc<DashboardQuery<Events, Memberships>>,
    pub auth_handler: Arc<AuthenticationHandler>,
}

impl AppState {
    pub fn build(
        events: InMemoryEventRepository,
        clock: Arc<dyn Clock>,
        navigator: Arc<dyn Navigator>,
        settle_delay: Duration,
    ) -> Self {
        let events = Arc::new(events);
        let memberships = Arc::new(InMemoryMembershipRepository::new());
        let pipeline = SubmissionPipeline::new(settle_delay, navigator);
        let tracker = Arc::new(RegistrationTracker::new(
            events.clone(),
            memberships.clone(),
            clock.clone(),
        ));

        Self {
            browse_handler: Arc::new(BrowseEventsHandler::new(events.clone(), clock.clone())),
            create_handler: Arc::new(CreateEventHandler::new(
                events.clone(),
                tracker.clone(),
                pipeline.clone(),
            )),
            dashboard_query: Arc::new(DashboardQuery::new(events.clone(), memberships, clock)),
            auth_handler: Arc::new(AuthenticationHandler::new(pipeline)),
            tracker,
            events,
        }
    }
}
