// Projector: replays activity streams into the read model, one watermark per stream.

use crate::modules::activities::adapters::outbound::projections::{
    ActivityProjectionRepository, WatermarkRepository,
};
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::list_activities::projection::{Mutation, apply};
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: ActivityProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
    catching_up: Mutex<()>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: ActivityProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark_repository: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository,
            catching_up: Mutex::new(()),
        }
    }

    fn watermark_key(&self, stream_id: &str) -> String {
        format!("{}/{stream_id}", self.name)
    }

    /// Last stream version this projector has applied, 0 when it never saw the stream.
    pub async fn position(&self, stream_id: &str) -> anyhow::Result<i64> {
        let stored = self
            .watermark_repository
            .get(&self.watermark_key(stream_id))
            .await?;
        Ok(stored.map(|v| v.parse::<i64>()).transpose()?.unwrap_or(0))
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &ActivityEvent,
    ) -> anyhow::Result<()> {
        tracing::debug!(event = event.event_type(), stream_id, version, "projecting");
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::AddParticipant {
                    activity_name,
                    email,
                    updated_at,
                    last_event_id,
                } => {
                    self.repository
                        .add_participant(&activity_name, &email, updated_at, &last_event_id)
                        .await?
                }
                Mutation::RemoveParticipant {
                    activity_name,
                    email,
                    updated_at,
                    last_event_id,
                } => {
                    self.repository
                        .remove_participant(&activity_name, &email, updated_at, &last_event_id)
                        .await?
                }
            }
        }
        self.watermark_repository
            .set(&self.watermark_key(stream_id), &version.to_string())
            .await?;
        Ok(())
    }

    /// Applies every event of `stream_id` past the watermark, in stream order.
    ///
    /// Catch-ups run one at a time, so events appended by concurrent writers reach the read
    /// model in the order the event store accepted them. A catch-up that failed halfway is
    /// completed by the next one.
    pub async fn catch_up<TEventStore>(
        &self,
        event_store: &TEventStore,
        stream_id: &str,
    ) -> anyhow::Result<()>
    where
        TEventStore: EventStore<ActivityEvent> + ?Sized,
    {
        let _guard = self.catching_up.lock().await;
        let position = self.position(stream_id).await?;
        let stream = event_store.load(stream_id).await?;
        if stream.version <= position {
            return Ok(());
        }
        for (version, event) in (1_i64..).zip(stream.events.iter()).skip(position as usize) {
            self.apply_one(stream_id, version, event).await?;
        }
        Ok(())
    }
}
