use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::state::ActivityState;

pub fn evolve(state: ActivityState, event: ActivityEvent) -> ActivityState {
    match (state, event) {
        (ActivityState::None, ActivityEvent::ActivityScheduledV1(e)) => ActivityState::Scheduled {
            name: e.name,
            description: e.description,
            schedule: e.schedule,
            max_participants: e.max_participants,
            participants: Vec::new(),
            updated_at: e.scheduled_at,
        },
        (
            ActivityState::Scheduled {
                name,
                description,
                schedule,
                max_participants,
                mut participants,
                ..
            },
            ActivityEvent::ParticipantSignedUpV1(e),
        ) => {
            if !participants.contains(&e.email) {
                participants.push(e.email);
            }
            ActivityState::Scheduled {
                name,
                description,
                schedule,
                max_participants,
                participants,
                updated_at: e.signed_up_at,
            }
        }
        (
            ActivityState::Scheduled {
                name,
                description,
                schedule,
                max_participants,
                mut participants,
                ..
            },
            ActivityEvent::ParticipantUnregisteredV1(e),
        ) => {
            participants.retain(|p| p != &e.email);
            ActivityState::Scheduled {
                name,
                description,
                schedule,
                max_participants,
                participants,
                updated_at: e.unregistered_at,
            }
        }
        (state, _) => state,
    }
}
