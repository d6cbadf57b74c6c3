/*
[INPUT]:  Error sources (key parsing, input marshalling, SDK transport, exchange rejections)
[OUTPUT]: Closed error enum surfaced to Rust and foreign callers
[POS]:    Error handling layer - unified error type for the entire crate
[UPDATE]: When adding new error sources or changing the SDK error mapping
*/

use thiserror::Error;

/// Main error type for the Hyperliquid binding
///
/// Every variant carries a human-readable message so foreign bindings can
/// surface it without knowing the Rust error chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum BindingError {
    /// Private key is not 32 bytes of hex or is outside the secp256k1 range
    #[error("Invalid private key: {message}")]
    InvalidPrivateKey { message: String },

    /// Caller-supplied value could not be marshalled (address, network, order fields)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Transport failure, timeout, or a response that could not be decoded
    #[error("Network error: {message}")]
    Network { message: String },

    /// Exchange rejected the request; message is the exchange's own text
    #[error("API error: {message}")]
    Api { message: String },
}

impl BindingError {
    /// Check if the error came from the transport rather than the exchange
    pub fn is_transport_error(&self) -> bool {
        matches!(self, BindingError::Network { .. })
    }

    /// Check if the error was raised locally before any round trip
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            BindingError::InvalidPrivateKey { .. } | BindingError::InvalidInput { .. }
        )
    }

    /// The message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            BindingError::InvalidPrivateKey { message }
            | BindingError::InvalidInput { message }
            | BindingError::Network { message }
            | BindingError::Api { message } => message,
        }
    }

    /// Create an API error carrying the exchange message verbatim
    pub fn api_error(message: impl Into<String>) -> Self {
        BindingError::Api {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        BindingError::InvalidInput {
            message: message.into(),
        }
    }

    /// Response arrived but a field could not be decoded
    pub fn malformed_response(detail: impl std::fmt::Display) -> Self {
        BindingError::Network {
            message: format!("malformed response: {detail}"),
        }
    }
}

impl From<hyperliquid_rust_sdk::Error> for BindingError {
    fn from(err: hyperliquid_rust_sdk::Error) -> Self {
        use hyperliquid_rust_sdk::Error as SdkError;

        let message = err.to_string();
        match err {
            SdkError::ServerRequest { .. } | SdkError::GenericRequest(_) | SdkError::JsonParse(_) => {
                BindingError::Network { message }
            }
            _ => BindingError::Api { message },
        }
    }
}

/// Result type alias for binding operations
pub type Result<T, E = BindingError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let network = BindingError::Network {
            message: "connection reset".to_string(),
        };
        assert!(network.is_transport_error());
        assert!(!network.is_validation_error());

        let key = BindingError::InvalidPrivateKey {
            message: "too short".to_string(),
        };
        assert!(key.is_validation_error());
        assert!(!key.is_transport_error());

        assert!(!BindingError::api_error("Insufficient margin").is_validation_error());
    }

    #[test]
    fn test_api_error_keeps_message_verbatim() {
        let err = BindingError::api_error("Order has invalid price.");
        assert_eq!(err.message(), "Order has invalid price.");
        assert_eq!(err.to_string(), "API error: Order has invalid price.");
    }

    #[test]
    fn test_malformed_response_is_transport() {
        let err = BindingError::malformed_response("accountValue: \"abc\"");
        assert!(err.is_transport_error());
        assert!(err.message().starts_with("malformed response"));
    }

    #[test]
    fn test_sdk_transport_errors_map_to_network() {
        let err: BindingError =
            hyperliquid_rust_sdk::Error::GenericRequest("operation timed out".to_string()).into();
        assert!(err.is_transport_error());
        assert!(err.message().contains("operation timed out"));

        let err: BindingError =
            hyperliquid_rust_sdk::Error::JsonParse("expected value".to_string()).into();
        assert!(err.is_transport_error());
    }

    #[test]
    fn test_sdk_client_rejection_maps_to_api() {
        let err: BindingError = hyperliquid_rust_sdk::Error::ClientRequest {
            status_code: 422,
            error_code: None,
            error_message: "Failed to deserialize the JSON body".to_string(),
            error_data: None,
        }
        .into();
        assert!(matches!(err, BindingError::Api { .. }));
        assert!(err.message().contains("Failed to deserialize the JSON body"));

        let err: BindingError = hyperliquid_rust_sdk::Error::AssetNotFound.into();
        assert!(matches!(err, BindingError::Api { .. }));
    }
}
