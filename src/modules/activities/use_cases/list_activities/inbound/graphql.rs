use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub spots_left: u32,
    pub participants: Vec<String>,
}

impl From<ActivityView> for GqlActivity {
    fn from(v: ActivityView) -> Self {
        Self {
            spots_left: v.spots_left(),
            name: v.name,
            description: v.description,
            schedule: v.schedule,
            max_participants: v.max_participants,
            participants: v.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.queries.list_all().await?;
        Ok(list.into_iter().map(GqlActivity::from).collect())
    }

    async fn activity(
        &self,
        context: &Context<'_>,
        name: String,
    ) -> GqlResult<Option<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state
            .queries
            .find_by_name(&name)
            .await?
            .map(GqlActivity::from))
    }
}
