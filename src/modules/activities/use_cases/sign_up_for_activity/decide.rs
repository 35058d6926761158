// Pure decision for a signup: the activity must exist, the email must be well formed,
// not already on the list, and there must be a free spot.

use crate::modules::activities::core::email::normalize_email;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::events::v1::participant_signed_up::ParticipantSignedUpV1;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignUpDecideError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,
}

pub fn decide_sign_up(
    state: &ActivityState,
    command: SignUpForActivity,
) -> Result<Vec<ActivityEvent>, SignUpDecideError> {
    let ActivityState::Scheduled { name, .. } = state else {
        return Err(SignUpDecideError::ActivityNotFound);
    };
    let email = normalize_email(&command.email).ok_or(SignUpDecideError::InvalidEmail)?;
    if state.has_participant(&email) {
        return Err(SignUpDecideError::AlreadySignedUp);
    }
    if state.is_full() {
        return Err(SignUpDecideError::ActivityFull);
    }
    Ok(vec![ActivityEvent::ParticipantSignedUpV1(
        ParticipantSignedUpV1 {
            activity_name: name.clone(),
            email,
            signed_up_at: command.requested_at,
        },
    )])
}
