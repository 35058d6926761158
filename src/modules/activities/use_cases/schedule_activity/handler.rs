use crate::modules::activities::adapters::outbound::projections::{
    ActivityProjectionRepository, WatermarkRepository,
};
use crate::modules::activities::core::events::{ActivityEvent, stream_id_for};
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::list_activities::handler::Projector;
use crate::modules::activities::use_cases::schedule_activity::command::ScheduleActivity;
use crate::modules::activities::use_cases::schedule_activity::decide::{
    ScheduleDecideError, decide_schedule,
};
use crate::shared::application::command::decide_and_append;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct ScheduleActivityHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<ActivityEvent> + ?Sized + 'static,
    TRepository: ActivityProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    event_store: Arc<TEventStore>,
    projector: Arc<Projector<TRepository, TWatermarkRepository>>,
}

impl<TEventStore, TRepository, TWatermarkRepository>
    ScheduleActivityHandler<TEventStore, TRepository, TWatermarkRepository>
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

    #[tracing::instrument(skip_all, fields(activity = %command.name))]
    pub async fn handle(
        &self,
        command: ScheduleActivity,
    ) -> Result<(), ApplicationError<ScheduleDecideError>> {
        let stream_id = stream_id_for(command.name.trim());
        decide_and_append(
            self.event_store.as_ref(),
            &stream_id,
            ActivityState::None,
            evolve,
            |state| decide_schedule(state, command.clone()),
        )
        .await?;
        self.projector
            .catch_up(self.event_store.as_ref(), &stream_id)
            .await
            .map_err(ApplicationError::Projection)?;
        tracing::debug!("activity scheduled");
        Ok(())
    }
}
