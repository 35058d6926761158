use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::events::v1::participant_unregistered::ParticipantUnregisteredV1;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UnregisterDecideError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

pub fn decide_unregister(
    state: &ActivityState,
    command: UnregisterFromActivity,
) -> Result<Vec<ActivityEvent>, UnregisterDecideError> {
    let ActivityState::Scheduled { name, .. } = state else {
        return Err(UnregisterDecideError::ActivityNotFound);
    };
    let email = command.email.trim();
    if !state.has_participant(email) {
        return Err(UnregisterDecideError::NotSignedUp);
    }
    Ok(vec![ActivityEvent::ParticipantUnregisteredV1(
        ParticipantUnregisteredV1 {
            activity_name: name.clone(),
            email: email.to_string(),
            unregistered_at: command.requested_at,
        },
    )])
}
