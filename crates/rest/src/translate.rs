//! HTTP-status to result translation.
//!
//! Every REST response the gateway receives goes through [`translate`],
//! which is a total function over status codes:
//!
//! | status    | outcome                                              |
//! |-----------|------------------------------------------------------|
//! | 200, 201  | decode body → `Value(T)`; decode failure is fatal    |
//! | 404       | `Absent` — a valid business outcome, not an error    |
//! | 400       | domain error `BAD_REQUEST`                           |
//! | 401       | domain error `UNAUTHORIZED`                          |
//! | 403       | domain error `FORBIDDEN`                             |
//! | 500       | domain error `INTERNAL_SERVER_ERROR`                 |
//! | other     | "invalid http status code" error                     |
//!
//! The response is consumed by value, so its body is released exactly once
//! on every branch.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use portico_core::error::{ErrorCode, GatewayError, GatewayResult};

/// Outcome of translating a success-class response.
///
/// `Absent` is how "entity not found" is told apart, throughout the
/// resolver layer, from "entity exists but the downstream call failed" —
/// callers must branch on it explicitly instead of treating it as a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translated<T> {
    Value(T),
    Absent,
}

impl<T> Translated<T> {
    /// The value, with `Absent` folded to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Translated::Value(value) => Some(value),
            Translated::Absent => None,
        }
    }
}

/// Translate `response` into a typed value, an absent marker, or a gateway
/// error, according to the status table above.
pub async fn translate<T: DeserializeOwned>(response: Response) -> GatewayResult<Translated<T>> {
    let status = response.status().as_u16();
    debug!(status, "translating rest response");

    match status {
        200 | 201 => {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            let value =
                serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))?;
            Ok(Translated::Value(value))
        }
        404 => Ok(Translated::Absent),
        400 => Err(GatewayError::domain(ErrorCode::BadRequest)),
        401 => Err(GatewayError::domain(ErrorCode::Unauthorized)),
        403 => Err(GatewayError::domain(ErrorCode::Forbidden)),
        500 => Err(GatewayError::domain(ErrorCode::InternalServerError)),
        code => Err(GatewayError::UnexpectedStatus(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    fn response(status: u16, body: &'static str) -> Response {
        Response::from(
            http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_ok_decodes_body() {
        let translated = translate::<Item>(response(200, r#"{"id":"x1"}"#))
            .await
            .unwrap();
        assert_eq!(translated, Translated::Value(Item { id: "x1".into() }));
    }

    #[tokio::test]
    async fn test_created_decodes_body() {
        let translated = translate::<Item>(response(201, r#"{"id":"x2"}"#))
            .await
            .unwrap();
        assert_eq!(translated.into_option(), Some(Item { id: "x2".into() }));
    }

    // Test critique: 404 est un résultat métier valide, jamais une erreur
    #[tokio::test]
    async fn test_not_found_is_absent_not_error() {
        let translated = translate::<Item>(response(404, "")).await.unwrap();
        assert_eq!(translated, Translated::Absent);
        assert_eq!(translated.into_option(), None);
    }

    #[tokio::test]
    async fn test_decode_failure_on_success_status_is_fatal() {
        let err = translate::<Item>(response(200, "not json")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_error_statuses_map_to_domain_codes() {
        let cases = [
            (400, ErrorCode::BadRequest, "Invalid Request"),
            (401, ErrorCode::Unauthorized, "Unauthorized user"),
            (
                403,
                ErrorCode::Forbidden,
                "Don't have permission to perform this action",
            ),
            (
                500,
                ErrorCode::InternalServerError,
                "Internal error, please try again later.",
            ),
        ];

        for (status, code, message) in cases {
            let err = translate::<Item>(response(status, "")).await.unwrap_err();
            assert_eq!(err.code(), Some(code), "status {}", status);
            assert_eq!(err.to_string(), message, "status {}", status);
        }
    }

    // Test critique: la table est totale, un code non mappé ne panique jamais
    #[tokio::test]
    async fn test_unmapped_status_yields_generic_error() {
        let err = translate::<Item>(response(418, "")).await.unwrap_err();
        match err {
            GatewayError::UnexpectedStatus(418) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(
            GatewayError::UnexpectedStatus(418)
                .to_string()
                .contains("invalid http status code")
        );
    }
}
