// Composition root for the timesheets bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers and expose them over HTTP and GraphQL.

pub mod actor;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
