//! Error types for the gateway domain layer.
//!
//! The gateway never retries and never suppresses: every failure is either
//! one of the variants below, returned to the caller as-is, or converted at
//! the API boundary into a structured error carrying a stable [`ErrorCode`].
//!
//! "Entity not found" is deliberately *not* part of this hierarchy — a 404
//! from the REST service is a valid business outcome and is modeled as an
//! explicit absent result by the response translator, not as an error.

use thiserror::Error;

// =============================================================================
// Error Codes
// =============================================================================

/// Machine-readable error codes surfaced to API clients.
///
/// Clients branch on the code in the error `extensions`, never on message
/// text, so the set and spelling of these codes is a wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The REST service rejected the request as malformed.
    BadRequest,
    /// The caller could not be authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed to do this.
    Forbidden,
    /// The REST service failed internally.
    InternalServerError,
}

impl ErrorCode {
    /// Wire spelling of the code, as placed in error extensions.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Canonical user-facing message paired with the code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "Invalid Request",
            ErrorCode::Unauthorized => "Unauthorized user",
            ErrorCode::Forbidden => "Don't have permission to perform this action",
            ErrorCode::InternalServerError => "Internal error, please try again later.",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Gateway Errors
// =============================================================================

/// Failures produced while building request URLs or interpreting REST
/// responses.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The base or an intermediate URL failed to parse.
    #[error("malformed server address: {0}")]
    MalformedAddress(#[from] url::ParseError),

    /// No bearer token was available to attach to the outgoing request.
    #[error("missing bearer token in request context")]
    MissingAuthToken,

    /// A status-derived error with a stable code, surfaced verbatim to
    /// API clients.
    #[error("{message}")]
    Domain { code: ErrorCode, message: String },

    /// The body of a success response did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The HTTP exchange itself failed (connection, timeout, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The REST service answered with a status code outside the translation
    /// table.
    #[error("invalid http status code: {0}")]
    UnexpectedStatus(u16),

    /// The REST service's health endpoint reported a bad status.
    #[error("bad http status code received when calling REST api, received code: {0}")]
    UpstreamUnhealthy(u16),
}

impl GatewayError {
    /// Build a domain error with the canonical message for `code`.
    pub fn domain(code: ErrorCode) -> Self {
        GatewayError::Domain {
            code,
            message: code.default_message().to_string(),
        }
    }

    /// The stable code for errors that carry one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            GatewayError::Domain { code, .. } => Some(*code),
            GatewayError::MissingAuthToken => Some(ErrorCode::Unauthorized),
            _ => None,
        }
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    // Test critique: les codes sont un contrat de wire, leur orthographe est figée
    #[test]
    fn test_error_code_wire_spelling() {
        assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
        assert_eq!(ErrorCode::Forbidden.as_str(), "FORBIDDEN");
        assert_eq!(
            ErrorCode::InternalServerError.as_str(),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[test]
    fn test_domain_error_carries_canonical_message() {
        let err = GatewayError::domain(ErrorCode::InternalServerError);
        assert_eq!(err.to_string(), "Internal error, please try again later.");
        assert_eq!(err.code(), Some(ErrorCode::InternalServerError));
    }

    // Un token manquant est toujours remonté comme non autorisé
    #[test]
    fn test_missing_token_maps_to_unauthorized() {
        assert_eq!(
            GatewayError::MissingAuthToken.code(),
            Some(ErrorCode::Unauthorized)
        );
    }
}
