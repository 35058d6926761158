use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantSignedUpV1 {
    pub activity_name: String,
    pub email: String,
    pub signed_up_at: i64,
}
