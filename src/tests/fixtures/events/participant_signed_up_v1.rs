use crate::modules::activities::core::events::v1::participant_signed_up::ParticipantSignedUpV1;

pub fn make_participant_signed_up_v1_event() -> ParticipantSignedUpV1 {
    ParticipantSignedUpV1 {
        activity_name: "Chess Club".into(),
        email: "michael@mergington.edu".into(),
        signed_up_at: 1_700_000_050_000,
    }
}
