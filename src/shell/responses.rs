use crate::shared::application::errors::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailResponse {
    pub detail: String,
}

pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(DetailResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

/// Domain rejections get the status chosen by `domain_status`; a lost race is 409, the rest 500.
pub fn application_error<D>(
    error: ApplicationError<D>,
    domain_status: impl FnOnce(&D) -> StatusCode,
) -> Response
where
    D: std::error::Error + 'static,
{
    match error {
        ApplicationError::Domain(reason) => detail(domain_status(&reason), reason.to_string()),
        e if e.is_version_conflict() => detail(
            StatusCode::CONFLICT,
            "Activity was modified concurrently, please retry",
        ),
        e => {
            tracing::error!(error = %e, "request failed");
            detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
