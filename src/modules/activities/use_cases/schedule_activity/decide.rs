use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::events::v1::activity_scheduled::ActivityScheduledV1;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::schedule_activity::command::ScheduleActivity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScheduleDecideError {
    #[error("Activity already exists")]
    AlreadyScheduled,

    #[error("Activity name must not be empty")]
    InvalidName,

    #[error("Activity must allow at least one participant")]
    InvalidCapacity,
}

pub fn decide_schedule(
    state: &ActivityState,
    command: ScheduleActivity,
) -> Result<Vec<ActivityEvent>, ScheduleDecideError> {
    match state {
        ActivityState::None => {
            let name = command.name.trim();
            if name.is_empty() {
                return Err(ScheduleDecideError::InvalidName);
            }
            if command.max_participants == 0 {
                return Err(ScheduleDecideError::InvalidCapacity);
            }
            Ok(vec![ActivityEvent::ActivityScheduledV1(ActivityScheduledV1 {
                name: name.to_string(),
                description: command.description,
                schedule: command.schedule,
                max_participants: command.max_participants,
                scheduled_at: command.scheduled_at,
            })])
        }
        ActivityState::Scheduled { .. } => Err(ScheduleDecideError::AlreadyScheduled),
    }
}
