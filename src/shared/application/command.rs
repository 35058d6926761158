use crate::shared::application::errors::ApplicationError;
use crate::shared::application::retry::retry_on_version_conflict;
use crate::shared::infrastructure::event_store::EventStore;

/// Loads `stream_id`, folds it from `initial` with `evolve`, lets `decide` produce new events and
/// appends them at the loaded version. Stale versions are retried with a fresh load.
pub async fn decide_and_append<Event, State, D, TEventStore, F>(
    event_store: &TEventStore,
    stream_id: &str,
    initial: State,
    evolve: fn(State, Event) -> State,
    decide: F,
) -> Result<(), ApplicationError<D>>
where
    Event: Clone + Send + Sync + 'static,
    State: Clone,
    D: std::error::Error + 'static,
    TEventStore: EventStore<Event> + ?Sized,
    F: Fn(&State) -> Result<Vec<Event>, D>,
{
    let initial = &initial;
    let decide = &decide;
    retry_on_version_conflict(move || async move {
        let stream = event_store.load(stream_id).await?;
        let state = stream.events.into_iter().fold(initial.clone(), evolve);
        let events = decide(&state).map_err(ApplicationError::Domain)?;
        event_store.append(stream_id, stream.version, &events).await?;
        Ok::<(), ApplicationError<D>>(())
    })
    .await
}
