use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::SignUpDecideError;
use crate::shell::responses;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub fn status_for(reason: &SignUpDecideError) -> StatusCode {
    match reason {
        SignUpDecideError::ActivityNotFound => StatusCode::NOT_FOUND,
        SignUpDecideError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        SignUpDecideError::AlreadySignedUp | SignUpDecideError::ActivityFull => {
            StatusCode::BAD_REQUEST
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignUpParams>,
) -> impl IntoResponse {
    let command = SignUpForActivity {
        activity_name: activity_name.clone(),
        email: params.email,
        requested_at: Utc::now().timestamp_millis(),
    };
    let email = command.email.trim().to_string();

    match state.sign_up_handler.handle(command).await {
        Ok(()) => responses::message(
            StatusCode::OK,
            format!("Signed up {email} for {activity_name}"),
        ),
        Err(e) => responses::application_error(e, status_for),
    }
}
