use crate::modules::activities::use_cases::schedule_activity::command::ScheduleActivity;

pub struct ScheduleActivityBuilder {
    inner: ScheduleActivity,
}

impl Default for ScheduleActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ScheduleActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: ScheduleActivity {
                name: "Chess Club".into(),
                description: "Learn strategies and compete in chess tournaments".into(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
                max_participants: 12,
                scheduled_at: 1_700_000_000_000,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn build(self) -> ScheduleActivity {
        self.inner
    }
}
