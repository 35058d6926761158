use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http::status_for;
use crate::shell::graphql::application_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister_from_activity(
        &self,
        context: &Context<'_>,
        activity: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let message = format!("Unregistered {} from {activity}", email.trim());
        state
            .unregister_handler
            .handle(UnregisterFromActivity {
                activity_name: activity,
                email,
                requested_at: Utc::now().timestamp_millis(),
            })
            .await
            .map_err(|e| application_error(e, status_for))?;
        Ok(message)
    }
}
