// Composition root for the posts service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory backend and seed reference users.
// - Wire the backend into the command handler, the projector and the query service.
// - Expose the HTTP and GraphQL routes.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
