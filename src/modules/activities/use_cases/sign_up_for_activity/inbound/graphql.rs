use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http::status_for;
use crate::shell::graphql::application_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up_for_activity(
        &self,
        context: &Context<'_>,
        activity: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let message = format!("Signed up {} for {activity}", email.trim());
        state
            .sign_up_handler
            .handle(SignUpForActivity {
                activity_name: activity,
                email,
                requested_at: Utc::now().timestamp_millis(),
            })
            .await
            .map_err(|e| application_error(e, status_for))?;
        Ok(message)
    }
}
