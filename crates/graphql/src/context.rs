//! Shared gateway state injected into the schema.

use portico_core::query::DecoratorRegistry;
use portico_rest::RestClient;

/// Everything a resolver needs to reach the REST service.
///
/// Built once by the composition root and shared behind an `Arc` in the
/// schema data; the registry inside is frozen and lock-free.
pub struct GatewayContext {
    pub registry: DecoratorRegistry,
    pub client: RestClient,
    pub rest_url: String,
}

impl GatewayContext {
    pub fn new(registry: DecoratorRegistry, client: RestClient, rest_url: impl Into<String>) -> Self {
        Self {
            registry,
            client,
            rest_url: rest_url.into(),
        }
    }
}
