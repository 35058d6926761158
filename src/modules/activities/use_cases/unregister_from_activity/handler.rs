use crate::modules::activities::adapters::outbound::projections::{
    ActivityProjectionRepository, WatermarkRepository,
};
use crate::modules::activities::core::events::{ActivityEvent, stream_id_for};
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::list_activities::handler::Projector;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::{
    UnregisterDecideError, decide_unregister,
};
use crate::shared::application::command::decide_and_append;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<ActivityEvent> + ?Sized + 'static,
    TRepository: ActivityProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    event_store: Arc<TEventStore>,
    projector: Arc<Projector<TRepository, TWatermarkRepository>>,
}

impl<TEventStore, TRepository, TWatermarkRepository>
    UnregisterFromActivityHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<ActivityEvent> + ?Sized + 'static,
    TRepository: ActivityProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        projector: Arc<Projector<TRepository, TWatermarkRepository>>,
    ) -> Self {
        Self {
            event_store,
            projector,
        }
    }

    #[tracing::instrument(skip_all, fields(activity = %command.activity_name))]
    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<(), ApplicationError<UnregisterDecideError>> {
        let stream_id = stream_id_for(&command.activity_name);
        let decided = decide_and_append(
            self.event_store.as_ref(),
            &stream_id,
            ActivityState::None,
            evolve,
            |state| decide_unregister(state, command.clone()),
        )
        .await;
        let projected = self
            .projector
            .catch_up(self.event_store.as_ref(), &stream_id)
            .await
            .map_err(ApplicationError::Projection);

        match decided.and(projected) {
            Ok(()) => {
                tracing::info!(email = %command.email.trim(), "student unregistered");
                Ok(())
            }
            Err(e) => {
                tracing::info!(error = %e, "unregister refused");
                Err(e)
            }
        }
    }
}
