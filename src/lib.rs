pub mod shared {
    pub mod application {
        pub mod command;
        pub mod errors;
        pub mod retry;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod email;
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod use_cases {
            pub mod schedule_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_activities {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;
