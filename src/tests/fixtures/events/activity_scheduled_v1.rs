use crate::modules::activities::core::events::v1::activity_scheduled::ActivityScheduledV1;

pub fn make_activity_scheduled_v1_event() -> ActivityScheduledV1 {
    ActivityScheduledV1 {
        name: "Chess Club".into(),
        description: "Learn strategies and compete in chess tournaments".into(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
        max_participants: 12,
        scheduled_at: 1_700_000_000_000,
    }
}
