use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::UnregisterDecideError;
use crate::shell::responses;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub fn status_for(reason: &UnregisterDecideError) -> StatusCode {
    match reason {
        UnregisterDecideError::ActivityNotFound => StatusCode::NOT_FOUND,
        UnregisterDecideError::NotSignedUp => StatusCode::BAD_REQUEST,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> impl IntoResponse {
    let command = UnregisterFromActivity {
        activity_name: activity_name.clone(),
        email: params.email,
        requested_at: Utc::now().timestamp_millis(),
    };
    let email = command.email.trim().to_string();

    match state.unregister_handler.handle(command).await {
        Ok(()) => responses::message(
            StatusCode::OK,
            format!("Unregistered {email} from {activity_name}"),
        ),
        Err(e) => responses::application_error(e, status_for),
    }
}

#[cfg(test)]
mod unregister_from_activity_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_always_conflicting_state, make_seeded_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities/{activity_name}/unregister", post(handle))
            .with_state(state)
    }

    async fn post_unregister(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::post(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_return_200_and_remove_the_participant() {
        let state = make_seeded_state().await;
        let (status, json) = post_unregister(
            state.clone(),
            "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["message"],
            "Unregistered michael@mergington.edu from Chess Club"
        );
        let chess = state.queries.find_by_name("Chess Club").await.unwrap().unwrap();
        assert_eq!(chess.participants, vec!["daniel@mergington.edu"]);
    }

    #[tokio::test]
    async fn it_should_return_400_when_not_signed_up() {
        let (status, json) = post_unregister(
            make_seeded_state().await,
            "/activities/Chess%20Club/unregister?email=testuser@example.com",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Student is not signed up for this activity");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_activity() {
        let (status, json) = post_unregister(
            make_seeded_state().await,
            "/activities/Knitting/unregister?email=michael@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_email_is_missing() {
        let (status, _) = post_unregister(
            make_seeded_state().await,
            "/activities/Chess%20Club/unregister",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_409_when_every_attempt_loses_the_race() {
        let (status, json) = post_unregister(
            make_always_conflicting_state(),
            "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["detail"], "Activity was modified concurrently, please retry");
    }
}
