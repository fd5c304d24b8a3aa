//! GraphQL schema definition.

use std::sync::Arc;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::context::GatewayContext;
use crate::resolvers::{
    ListMutation, ListQuery, TodoMutation, TodoQuery, UserMutation, UserQuery,
};

// -----------------------------------------------------------------------------
// Schema Configuration
// -----------------------------------------------------------------------------

/// Maximum query depth to prevent deeply nested queries (DoS protection).
/// Note: GraphQL introspection requires depth ~13, so we use 15 to allow it.
pub const MAX_QUERY_DEPTH: usize = 15;

/// Maximum query complexity score (DoS protection).
pub const MAX_QUERY_COMPLEXITY: usize = 500;

// -----------------------------------------------------------------------------
// Roots
// -----------------------------------------------------------------------------

/// Merged query root.
#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQuery, TodoQuery, ListQuery);

/// Merged mutation root.
#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutation, TodoMutation, ListMutation);

/// The gateway schema type.
pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the gateway schema with depth and complexity limits.
pub fn build_schema(gateway: Arc<GatewayContext>) -> GatewaySchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(gateway)
    .limit_depth(MAX_QUERY_DEPTH)
    .limit_complexity(MAX_QUERY_COMPLEXITY)
    .finish()
}
