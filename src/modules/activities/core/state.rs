#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityState {
    None,
    Scheduled {
        name: String,
        description: String,
        schedule: String,
        max_participants: u32,
        participants: Vec<String>,
        updated_at: i64,
    },
}

impl ActivityState {
    pub fn has_participant(&self, email: &str) -> bool {
        match self {
            ActivityState::None => false,
            ActivityState::Scheduled { participants, .. } => {
                participants.iter().any(|p| p == email)
            }
        }
    }

    pub fn is_full(&self) -> bool {
        match self {
            ActivityState::None => false,
            ActivityState::Scheduled {
                participants,
                max_participants,
                ..
            } => participants.len() >= *max_participants as usize,
        }
    }
}
