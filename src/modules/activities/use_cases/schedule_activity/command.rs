#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub scheduled_at: i64,
}
