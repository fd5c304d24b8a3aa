//! End-to-end tests for the GraphQL gateway against a mock REST service.
//!
//! Each test drives the whole pipeline: resolver arguments become a filter
//! set, the registry builds the request URL, the client calls the mock
//! server, the response is translated and the page cursor window derived.

use std::sync::Arc;

use async_graphql::{Request, Value};
use httpmock::prelude::*;
use serde_json::json;

use portico_core::query::DecoratorRegistry;
use portico_graphql::{build_schema, GatewayContext, GatewaySchema};
use portico_rest::{BearerAuthDecorator, RequestContext, RestClient};

fn schema_for(server: &MockServer) -> GatewaySchema {
    let registry = DecoratorRegistry::builder().register_standard().freeze();
    let client = RestClient::new(reqwest::Client::new(), Arc::new(BearerAuthDecorator));
    let gateway = Arc::new(GatewayContext::new(registry, client, server.base_url()));
    build_schema(gateway)
}

fn authed(query: &str) -> Request {
    Request::new(query).data(RequestContext::new(Some("Bearer test-token".into())))
}

#[tokio::test]
async fn users_query_builds_filtered_url_and_paginates() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users")
            .query_param("limit", "2")
            .query_param("role", "admin")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                { "id": "id1", "email": "test1@email.com", "role": "admin" },
                { "id": "id2", "email": "test2@email.com", "role": "admin" },
            ]));
    });

    let response = schema_for(&server)
        .execute(authed(
            r#"{
                users(limit: 2, filter: { role: ADMIN }) {
                    data { id email }
                    pageInfo { startCursor endCursor }
                    totalCount
                }
            }"#,
        ))
        .await;

    mock.assert();
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "users": {
                "data": [
                    { "id": "id1", "email": "test1@email.com" },
                    { "id": "id2", "email": "test2@email.com" },
                ],
                "pageInfo": { "startCursor": "id1", "endCursor": "id2" },
                "totalCount": 2,
            }
        })
    );
}

// Test critique: une page vide n'a pas de pageInfo, jamais des curseurs vides
#[tokio::test]
async fn empty_page_has_null_page_info() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/todos");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let response = schema_for(&server)
        .execute(authed(
            r#"{ todos { data { id } pageInfo { startCursor } totalCount } }"#,
        ))
        .await;

    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "todos": { "data": [], "pageInfo": null, "totalCount": 0 } })
    );
}

// Test critique: 404 en aval devient un null côté API, pas une erreur
#[tokio::test]
async fn missing_user_resolves_to_null_without_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/users/ghost");
        then.status(404);
    });

    let response = schema_for(&server)
        .execute(authed(r#"{ user(id: "ghost") { id email } }"#))
        .await;

    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "user": null })
    );
}

#[tokio::test]
async fn downstream_failure_surfaces_structured_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/todos");
        then.status(500);
    });

    let response = schema_for(&server)
        .execute(authed(r#"{ todos { data { id } } }"#))
        .await;

    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert_eq!(error.message, "Internal error, please try again later.");
    let extensions = error.extensions.as_ref().expect("extensions present");
    assert_eq!(
        extensions.get("code"),
        Some(&Value::from("INTERNAL_SERVER_ERROR"))
    );
}

#[tokio::test]
async fn request_without_token_is_unauthorized_before_reaching_rest() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/lists");
        then.status(200).json_body(json!([]));
    });

    let response = schema_for(&server)
        .execute(Request::new(r#"{ lists { data { id } } }"#))
        .await;

    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert_eq!(error.message, "Unauthorized user");
    let extensions = error.extensions.as_ref().expect("extensions present");
    assert_eq!(extensions.get("code"), Some(&Value::from("UNAUTHORIZED")));
    assert_eq!(mock.hits(), 0);
}
