// Composition root: configuration, wiring of in-memory infrastructure into the use case
// handlers, seeding, and the HTTP/GraphQL surface.

pub mod config;
pub mod graphql;
pub mod http;
pub mod responses;
pub mod seed;
pub mod state;
