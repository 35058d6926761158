use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use crate::shell::responses;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<ActivityView> for ActivityDetails {
    fn from(v: ActivityView) -> Self {
        Self {
            description: v.description,
            schedule: v.schedule,
            max_participants: v.max_participants,
            participants: v.participants,
        }
    }
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_all().await {
        Ok(views) => {
            let catalog: BTreeMap<String, ActivityDetails> = views
                .into_iter()
                .map(|v| (v.name.clone(), ActivityDetails::from(v)))
                .collect();
            Json(catalog).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "listing activities failed");
            responses::detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
