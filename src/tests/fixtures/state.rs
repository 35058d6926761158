use crate::modules::activities::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::activities::core::events::ActivityEvent;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::seed::seed_catalog;
use crate::shell::state::AppState;
use crate::tests::fixtures::event_store::AlwaysStaleEventStore;
use std::sync::Arc;

pub async fn make_seeded_state() -> AppState {
    let state = AppState::in_memory();
    seed_catalog(&state).await.expect("seeding failed");
    state
}

pub fn make_offline_event_store_state() -> AppState {
    let mut event_store = InMemoryEventStore::<ActivityEvent>::new();
    event_store.toggle_offline();
    AppState::from_parts(Arc::new(event_store), Arc::new(InMemoryProjections::new()))
}

pub fn make_offline_projections_state() -> AppState {
    let projections = InMemoryProjections::new();
    projections.toggle_offline();
    AppState::from_parts(
        Arc::new(InMemoryEventStore::<ActivityEvent>::new()),
        Arc::new(projections),
    )
}

/// Seeded catalog whose read model goes offline afterwards: appends succeed, projecting fails.
pub async fn make_seeded_state_with_offline_projections() -> AppState {
    let projections = Arc::new(InMemoryProjections::new());
    let state = AppState::from_parts(
        Arc::new(InMemoryEventStore::<ActivityEvent>::new()),
        projections.clone(),
    );
    seed_catalog(&state).await.expect("seeding failed");
    projections.toggle_offline();
    state
}

/// Every append loses the race against another writer.
pub fn make_always_conflicting_state() -> AppState {
    AppState::from_parts(
        Arc::new(AlwaysStaleEventStore::chess_club()),
        Arc::new(InMemoryProjections::new()),
    )
}
