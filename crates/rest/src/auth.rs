//! Per-request authentication context and request decoration.
//!
//! The gateway never mints credentials of its own: the inbound request's
//! `Authorization` header is captured into a [`RequestContext`] and attached
//! verbatim to every outgoing REST request. Token verification is the REST
//! service's business.

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use tracing::debug;

use portico_core::error::{GatewayError, GatewayResult};

/// Context travelling with one inbound request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Raw `Authorization` header value of the inbound request, if present.
    pub auth_header: Option<String>,
}

impl RequestContext {
    pub fn new(auth_header: Option<String>) -> Self {
        Self { auth_header }
    }
}

/// Decorates an outgoing request before it is sent.
pub trait RequestDecorator: Send + Sync {
    fn decorate(
        &self,
        ctx: &RequestContext,
        request: RequestBuilder,
    ) -> GatewayResult<RequestBuilder>;
}

/// Forwards the inbound bearer token on the `Authorization` header.
///
/// Fails with [`GatewayError::MissingAuthToken`] when the calling context
/// carries no token; the API boundary surfaces that as an unauthorized
/// domain error.
pub struct BearerAuthDecorator;

impl RequestDecorator for BearerAuthDecorator {
    fn decorate(
        &self,
        ctx: &RequestContext,
        request: RequestBuilder,
    ) -> GatewayResult<RequestBuilder> {
        debug!("decorating outgoing request auth header");

        match &ctx.auth_header {
            Some(token) => Ok(request.header(AUTHORIZATION, token)),
            None => Err(GatewayError::MissingAuthToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_rejected() {
        let client = reqwest::Client::new();
        let request = client.get("http://test.com/users");

        let err = BearerAuthDecorator
            .decorate(&RequestContext::default(), request)
            .unwrap_err();
        assert!(matches!(err, GatewayError::MissingAuthToken));
    }

    #[test]
    fn test_token_is_forwarded_verbatim() {
        let client = reqwest::Client::new();
        let ctx = RequestContext::new(Some("Bearer abc.def.ghi".into()));

        let request = BearerAuthDecorator
            .decorate(&ctx, client.get("http://test.com/users"))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc.def.ghi"
        );
    }
}
