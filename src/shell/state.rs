use crate::modules::activities::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::list_activities::handler::Projector;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::schedule_activity::handler::ScheduleActivityHandler;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub const PROJECTOR_NAME: &str = "activity_catalog";

pub type ActivityEventStore = dyn EventStore<ActivityEvent>;
pub type ActivityProjector = Projector<InMemoryProjections, InMemoryProjections>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub schedule_handler:
        Arc<ScheduleActivityHandler<ActivityEventStore, InMemoryProjections, InMemoryProjections>>,
    pub sign_up_handler:
        Arc<SignUpForActivityHandler<ActivityEventStore, InMemoryProjections, InMemoryProjections>>,
    pub unregister_handler: Arc<
        UnregisterFromActivityHandler<ActivityEventStore, InMemoryProjections, InMemoryProjections>,
    >,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self::from_parts(
            Arc::new(InMemoryEventStore::<ActivityEvent>::new()),
            Arc::new(InMemoryProjections::new()),
        )
    }

    pub fn from_parts(
        event_store: Arc<ActivityEventStore>,
        projections: Arc<InMemoryProjections>,
    ) -> Self {
        let projector: Arc<ActivityProjector> = Arc::new(Projector::new(
            PROJECTOR_NAME,
            projections.clone(),
            projections.clone(),
        ));
        Self {
            queries: projections,
            schedule_handler: Arc::new(ScheduleActivityHandler::new(
                event_store.clone(),
                projector.clone(),
            )),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(
                event_store.clone(),
                projector.clone(),
            )),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(
                event_store,
                projector,
            )),
        }
    }
}
