use crate::modules::activities::adapters::outbound::projections::{
    ActivityProjectionRepository, WatermarkRepository,
};
use crate::modules::activities::use_cases::list_activities::projection::{
    ActivityRow, ActivityView,
};
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use anyhow::anyhow;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<BTreeMap<String, ActivityRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow!("{what} offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: ActivityRow) -> anyhow::Result<()> {
        self.ensure_online("Projections repository")?;
        self.rows.write().await.insert(row.name.clone(), row);
        Ok(())
    }

    async fn add_participant(
        &self,
        activity_name: &str,
        email: &str,
        updated_at: i64,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online("Projections repository")?;
        let mut guard = self.rows.write().await;
        let row = guard
            .get_mut(activity_name)
            .ok_or_else(|| anyhow!("activity {activity_name} is not projected"))?;
        if !row.participants.iter().any(|p| p == email) {
            row.participants.push(email.to_string());
        }
        row.updated_at = updated_at;
        row.last_event_id = Some(last_event_id.to_string());
        Ok(())
    }

    async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
        updated_at: i64,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online("Projections repository")?;
        let mut guard = self.rows.write().await;
        let row = guard
            .get_mut(activity_name)
            .ok_or_else(|| anyhow!("activity {activity_name} is not projected"))?;
        row.participants.retain(|p| p != email);
        row.updated_at = updated_at;
        row.last_event_id = Some(last_event_id.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark repository")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark repository")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryProjections {
    async fn list_all(&self) -> anyhow::Result<Vec<ActivityView>> {
        self.ensure_online("Projections repository")?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .cloned()
            .map(ActivityView::from)
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<ActivityView>> {
        self.ensure_online("Projections repository")?;
        Ok(self
            .rows
            .read()
            .await
            .get(name)
            .cloned()
            .map(ActivityView::from))
    }
}

#[cfg(test)]
mod activity_in_memory_projections_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> ActivityRow {
        ActivityRow {
            name: "Chess Club".into(),
            description: "Learn strategies and compete in chess tournaments".into(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
            max_participants: 12,
            participants: vec![],
            updated_at: 1_700_000_000_000,
            last_event_id: Some("Activity-Chess Club:1".into()),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_upsert_and_find_the_row(row: ActivityRow) {
        let repository = InMemoryProjections::new();
        repository.upsert(row.clone()).await.unwrap();
        let found = repository.find_by_name("Chess Club").await.unwrap();
        assert_eq!(found, Some(ActivityView::from(row)));
        assert_eq!(repository.find_by_name("Art Club").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_rows_ordered_by_name(row: ActivityRow) {
        let repository = InMemoryProjections::new();
        repository
            .upsert(ActivityRow {
                name: "Programming Class".into(),
                ..row.clone()
            })
            .await
            .unwrap();
        repository.upsert(row).await.unwrap();
        let names: Vec<_> = repository
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["Chess Club", "Programming Class"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_add_a_participant_once(row: ActivityRow) {
        let repository = InMemoryProjections::new();
        repository.upsert(row).await.unwrap();
        for version in [2, 3] {
            repository
                .add_participant(
                    "Chess Club",
                    "michael@mergington.edu",
                    1_700_000_050_000,
                    &format!("Activity-Chess Club:{version}"),
                )
                .await
                .unwrap();
        }
        let rows = repository.rows.read().await;
        let stored = rows.get("Chess Club").unwrap();
        assert_eq!(stored.participants, vec!["michael@mergington.edu"]);
        assert_eq!(
            stored.last_event_id.as_deref(),
            Some("Activity-Chess Club:3")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_a_participant(row: ActivityRow) {
        let repository = InMemoryProjections::new();
        repository
            .upsert(ActivityRow {
                participants: vec!["michael@mergington.edu".into(), "daniel@mergington.edu".into()],
                ..row
            })
            .await
            .unwrap();
        repository
            .remove_participant("Chess Club", "michael@mergington.edu", 1, "Activity-Chess Club:4")
            .await
            .unwrap();
        let view = repository.find_by_name("Chess Club").await.unwrap().unwrap();
        assert_eq!(view.participants, vec!["daniel@mergington.edu"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_add_a_participant_to_an_unknown_activity() {
        let repository = InMemoryProjections::new();
        let result = repository
            .add_participant("Chess Club", "michael@mergington.edu", 1, "Activity-Chess Club:1")
            .await;
        assert!(result.unwrap_err().to_string().contains("not projected"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_set_the_watermark_and_confirm_its_set() {
        let repository = InMemoryProjections::new();
        repository.set("projector-name/Activity-Chess Club", "2").await.unwrap();
        assert_eq!(
            repository.get("projector-name/Activity-Chess Club").await.unwrap(),
            Some(String::from("2"))
        );
        assert_eq!(repository.get("projector-name/Activity-Art Club").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_come_back_online_when_toggled_again(row: ActivityRow) {
        let repository = InMemoryProjections::new();
        repository.toggle_offline();
        assert!(repository.upsert(row.clone()).await.is_err());
        repository.toggle_offline();
        repository.upsert(row).await.unwrap();
        assert_eq!(repository.list_all().await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline(row: ActivityRow) {
        let repository = InMemoryProjections::new();
        repository.toggle_offline();
        assert!(
            repository
                .upsert(row)
                .await
                .unwrap_err()
                .to_string()
                .contains("Projections repository offline")
        );
        assert!(
            repository
                .get("projector-name")
                .await
                .unwrap_err()
                .to_string()
                .contains("Watermark repository offline")
        );
        assert!(repository.list_all().await.is_err());
    }
}
