// Composition root for the judging bounded context.
//
// Responsibilities
// - Read config from environment.
// - Wire concrete stores into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
