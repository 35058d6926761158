pub mod v1 {
    pub mod activity_scheduled;
    pub mod participant_signed_up;
    pub mod participant_unregistered;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    ActivityScheduledV1(v1::activity_scheduled::ActivityScheduledV1),
    ParticipantSignedUpV1(v1::participant_signed_up::ParticipantSignedUpV1),
    ParticipantUnregisteredV1(v1::participant_unregistered::ParticipantUnregisteredV1),
}

impl ActivityEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ActivityEvent::ActivityScheduledV1(_) => "ActivityScheduled",
            ActivityEvent::ParticipantSignedUpV1(_) => "ParticipantSignedUp",
            ActivityEvent::ParticipantUnregisteredV1(_) => "ParticipantUnregistered",
        }
    }
}

/// Stream that holds every event of one activity.
pub fn stream_id_for(activity_name: &str) -> String {
    format!("Activity-{activity_name}")
}
