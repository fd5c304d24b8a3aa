//! GraphQL API for the portico gateway.
//!
//! Exposes the todo-service REST API as a GraphQL schema: queries and
//! mutations over users, todos and lists, with cursor-window pagination on
//! every list-shaped result. Resolvers hold no business logic — they
//! assemble filter sets, let `portico-core` build the request URL, and let
//! `portico-rest` perform and translate the call.

mod context;
mod errors;
mod resolvers;
mod schema;
mod server;
mod types;

pub use context::GatewayContext;
pub use schema::{
    build_schema, GatewaySchema, MutationRoot, QueryRoot, MAX_QUERY_COMPLEXITY, MAX_QUERY_DEPTH,
};
pub use server::{serve, serve_with_shutdown, ServerConfig};
