pub mod commands {
    pub mod schedule_activity;
    pub mod sign_up_for_activity;
    pub mod unregister_from_activity;
}

pub mod event_store;

pub mod events {
    pub mod activity_scheduled_v1;
    pub mod participant_signed_up_v1;
}

pub mod state;
