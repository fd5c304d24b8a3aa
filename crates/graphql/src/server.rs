//! GraphQL HTTP server.

use std::future::Future;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
};
use tracing::{debug, info};

use portico_rest::{HealthChecker, RequestContext};

use crate::schema::GatewaySchema;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_playground: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            enable_playground: true,
        }
    }
}

#[derive(Clone)]
struct AppState {
    schema: GatewaySchema,
    health: HealthChecker,
}

/// Start the GraphQL server.
pub async fn serve(
    schema: GatewaySchema,
    health: HealthChecker,
    config: ServerConfig,
) -> Result<(), std::io::Error> {
    let app = router(schema, health, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("⚡ GraphQL gateway listening on http://{}", addr);

    axum::serve(listener, app).await
}

/// Start the GraphQL server with graceful shutdown support.
pub async fn serve_with_shutdown<F>(
    schema: GatewaySchema,
    health: HealthChecker,
    config: ServerConfig,
    shutdown_signal: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(schema, health, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    debug!(addr = %addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

fn router(schema: GatewaySchema, health: HealthChecker, config: &ServerConfig) -> Router {
    let state = AppState { schema, health };

    let mut app = Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .route("/health", get(health_check));

    if config.enable_playground {
        app = app.route("/", get(graphql_playground));
    }

    app.with_state(state)
}

/// GraphQL query handler.
///
/// The inbound `Authorization` header is captured into the per-request
/// context so outgoing REST requests can forward it.
async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let request = req.into_inner().data(RequestContext::new(token));
    state.schema.execute(request).await.into()
}

/// GraphQL Playground UI.
async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check endpoint: probes the downstream REST service.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.health.check().await {
        Ok(()) => (StatusCode::OK, "OK".to_string()),
        Err(err) => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
    }
}
