use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub struct SignUpForActivityBuilder {
    inner: SignUpForActivity,
}

impl Default for SignUpForActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SignUpForActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignUpForActivity {
                activity_name: "Chess Club".into(),
                email: "testuser@example.com".into(),
                requested_at: 1_700_000_050_000,
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

    pub fn requested_at(mut self, v: i64) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> SignUpForActivity {
        self.inner
    }
}
