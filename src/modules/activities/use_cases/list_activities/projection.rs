// Read model for the activity catalog, and the translation of events into row mutations.

use crate::modules::activities::core::events::ActivityEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub updated_at: i64,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityView {
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }
}

impl From<ActivityRow> for ActivityView {
    fn from(row: ActivityRow) -> Self {
        Self {
            name: row.name,
            description: row.description,
            schedule: row.schedule,
            max_participants: row.max_participants,
            participants: row.participants,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(ActivityRow),
    AddParticipant {
        activity_name: String,
        email: String,
        updated_at: i64,
        last_event_id: String,
    },
    RemoveParticipant {
        activity_name: String,
        email: String,
        updated_at: i64,
        last_event_id: String,
    },
}

/// `last_event_id` is `"{stream_id}:{version}"`.
pub fn apply(stream_id: &str, version: i64, event: &ActivityEvent) -> Vec<Mutation> {
    let last_event_id = format!("{stream_id}:{version}");
    match event {
        ActivityEvent::ActivityScheduledV1(e) => vec![Mutation::Upsert(ActivityRow {
            name: e.name.clone(),
            description: e.description.clone(),
            schedule: e.schedule.clone(),
            max_participants: e.max_participants,
            participants: Vec::new(),
            updated_at: e.scheduled_at,
            last_event_id: Some(last_event_id),
        })],
        ActivityEvent::ParticipantSignedUpV1(e) => vec![Mutation::AddParticipant {
            activity_name: e.activity_name.clone(),
            email: e.email.clone(),
            updated_at: e.signed_up_at,
            last_event_id,
        }],
        ActivityEvent::ParticipantUnregisteredV1(e) => vec![Mutation::RemoveParticipant {
            activity_name: e.activity_name.clone(),
            email: e.email.clone(),
            updated_at: e.unregistered_at,
            last_event_id,
        }],
    }
}
