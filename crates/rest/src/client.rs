//! Authenticated HTTP client for the todo-service REST API.
//!
//! [`RestClient`] owns the transport concerns of one outgoing call:
//! building the request, decorating it with credentials, sending it, and
//! recording metrics. It performs no retries and interprets nothing — the
//! response goes to [`crate::translate`] untouched.

use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

use portico_core::error::{GatewayError, GatewayResult};
use portico_core::metrics::{record_rest_error, record_rest_request, RequestTimer};

use crate::auth::{RequestContext, RequestDecorator};
use crate::translate::{translate, Translated};

/// Client for the downstream REST service.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    decorator: Arc<dyn RequestDecorator>,
}

impl RestClient {
    pub fn new(http: reqwest::Client, decorator: Arc<dyn RequestDecorator>) -> Self {
        Self { http, decorator }
    }

    /// Send a GET request.
    pub async fn get(&self, ctx: &RequestContext, url: &str) -> GatewayResult<Response> {
        self.send(ctx, self.http.get(url), Method::GET).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, ctx: &RequestContext, url: &str) -> GatewayResult<Response> {
        self.send(ctx, self.http.delete(url), Method::DELETE).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        url: &str,
        body: &B,
    ) -> GatewayResult<Response> {
        self.send(ctx, self.http.post(url).json(body), Method::POST)
            .await
    }

    /// Send a PATCH request with a JSON body.
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        url: &str,
        body: &B,
    ) -> GatewayResult<Response> {
        self.send(ctx, self.http.patch(url).json(body), Method::PATCH)
            .await
    }

    /// GET `url` and translate the response as `T`.
    pub async fn get_translated<T: serde::de::DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        url: &str,
    ) -> GatewayResult<Translated<T>> {
        let response = self.get(ctx, url).await?;
        translate(response).await
    }

    async fn send(
        &self,
        ctx: &RequestContext,
        request: RequestBuilder,
        method: Method,
    ) -> GatewayResult<Response> {
        debug!(%method, "sending request to rest service");

        let request = self.decorator.decorate(ctx, request)?;

        let _timer = RequestTimer::new();
        let response = request.send().await.map_err(|e| {
            error!(%method, "rest request failed: {e}");
            record_rest_error(method.as_str());
            GatewayError::Transport(e.to_string())
        })?;

        record_rest_request(method.as_str(), response.status().as_u16());
        Ok(response)
    }
}
