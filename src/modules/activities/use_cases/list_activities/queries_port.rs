use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityQueries {
    /// All activities, ordered by name.
    async fn list_all(&self) -> anyhow::Result<Vec<ActivityView>>;

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<ActivityView>>;
}
