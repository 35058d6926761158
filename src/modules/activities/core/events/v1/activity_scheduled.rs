use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityScheduledV1 {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub scheduled_at: i64,
}
