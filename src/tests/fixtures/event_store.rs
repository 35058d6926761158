use crate::modules::activities::core::events::{ActivityEvent, stream_id_for};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use crate::tests::fixtures::events::activity_scheduled_v1::make_activity_scheduled_v1_event;
use crate::tests::fixtures::events::participant_signed_up_v1::make_participant_signed_up_v1_event;
use async_trait::async_trait;

/// Serves a fixed stream and rejects every append with a version mismatch.
pub struct AlwaysStaleEventStore {
    stream_id: String,
    events: Vec<ActivityEvent>,
}

impl AlwaysStaleEventStore {
    /// Chess Club, with michael@mergington.edu signed up.
    pub fn chess_club() -> Self {
        Self {
            stream_id: stream_id_for("Chess Club"),
            events: vec![
                ActivityEvent::ActivityScheduledV1(make_activity_scheduled_v1_event()),
                ActivityEvent::ParticipantSignedUpV1(make_participant_signed_up_v1_event()),
            ],
        }
    }
}

#[async_trait]
impl EventStore<ActivityEvent> for AlwaysStaleEventStore {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<ActivityEvent>, EventStoreError> {
        let events = if stream_id == self.stream_id {
            self.events.clone()
        } else {
            Vec::new()
        };
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        _stream_id: &str,
        expected_version: i64,
        _new_events: &[ActivityEvent],
    ) -> Result<(), EventStoreError> {
        Err(EventStoreError::VersionMismatch {
            expected: expected_version,
            actual: expected_version + 1,
        })
    }
}
