use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantUnregisteredV1 {
    pub activity_name: String,
    pub email: String,
    pub unregistered_at: i64,
}
