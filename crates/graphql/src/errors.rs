//! Conversion of gateway errors into API-boundary errors.

use async_graphql::{Error, ErrorExtensions};

use portico_core::error::GatewayError;

/// Convert a [`GatewayError`] into the structured error shape exposed to
/// API clients: `{ message, extensions: { code } }` for errors carrying a
/// stable code, a bare message otherwise.
pub(crate) trait IntoGqlError {
    fn into_gql(self) -> Error;
}

impl IntoGqlError for GatewayError {
    fn into_gql(self) -> Error {
        match self.code() {
            Some(code) => {
                let message = match &self {
                    GatewayError::Domain { message, .. } => message.clone(),
                    _ => code.default_message().to_string(),
                };
                Error::new(message).extend_with(|_, e| e.set("code", code.as_str()))
            }
            None => Error::new(self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_core::error::ErrorCode;

    #[test]
    fn test_domain_error_gets_code_extension() {
        let err = GatewayError::domain(ErrorCode::Forbidden).into_gql();
        assert_eq!(
            err.message,
            "Don't have permission to perform this action"
        );
        let extensions = err.extensions.expect("extensions present");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("FORBIDDEN"))
        );
    }

    // Un token manquant devient une erreur UNAUTHORIZED côté API
    #[test]
    fn test_missing_token_surfaces_as_unauthorized() {
        let err = GatewayError::MissingAuthToken.into_gql();
        assert_eq!(err.message, "Unauthorized user");
        let extensions = err.extensions.expect("extensions present");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("UNAUTHORIZED"))
        );
    }

    #[test]
    fn test_codeless_error_keeps_message_only() {
        let err = GatewayError::UnexpectedStatus(418).into_gql();
        assert_eq!(err.message, "invalid http status code: 418");
        assert!(err.extensions.is_none());
    }
}
