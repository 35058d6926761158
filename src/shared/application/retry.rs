use crate::shared::application::errors::ApplicationError;
use std::future::Future;

pub const MAX_ATTEMPTS: usize = 5;

/// Re-runs `attempt` while it fails on a stale stream version, up to `MAX_ATTEMPTS` times.
pub async fn retry_on_version_conflict<T, D, F, Fut>(
    mut attempt: F,
) -> Result<T, ApplicationError<D>>
where
    D: std::error::Error + 'static,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApplicationError<D>>>,
{
    let mut tries = 1;
    loop {
        match attempt().await {
            Err(e) if e.is_version_conflict() && tries < MAX_ATTEMPTS => {
                tracing::warn!(attempt = tries, error = %e, "stream changed underneath, retrying");
                tries += 1;
            }
            result => return result,
        }
    }
}
