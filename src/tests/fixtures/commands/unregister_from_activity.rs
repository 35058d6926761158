use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub struct UnregisterFromActivityBuilder {
    inner: UnregisterFromActivity,
}

impl Default for UnregisterFromActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UnregisterFromActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: UnregisterFromActivity {
                activity_name: "Chess Club".into(),
                email: "testuser@example.com".into(),
                requested_at: 1_700_000_090_000,
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> UnregisterFromActivity {
        self.inner
    }
}
