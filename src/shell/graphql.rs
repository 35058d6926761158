use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};
use axum::http::StatusCode;

pub use crate::modules::activities::use_cases::list_activities::inbound::graphql::QueryRoot;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::graphql::SignUpMutation;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::graphql::UnregisterMutation;
use crate::shared::application::errors::ApplicationError;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(SignUpMutation, UnregisterMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// GraphQL counterpart of the HTTP error mapping; the status travels in the `status` extension.
pub fn application_error<D>(
    error: ApplicationError<D>,
    domain_status: impl FnOnce(&D) -> StatusCode,
) -> async_graphql::Error
where
    D: std::error::Error + 'static,
{
    let (status, message) = match &error {
        ApplicationError::Domain(reason) => (domain_status(reason), reason.to_string()),
        e if e.is_version_conflict() => (
            StatusCode::CONFLICT,
            "Activity was modified concurrently, please retry".to_string(),
        ),
        e => {
            tracing::error!(error = %e, "graphql request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };
    async_graphql::Error::new(message).extend_with(|_, ext| ext.set("status", status.as_u16()))
}
