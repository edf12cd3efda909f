// Composition root for the reports service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the appointment store behind the queries port.
// - Expose the report use cases over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
