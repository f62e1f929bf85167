//! # API Error Type
//!
//! Unified error type for QuickShop commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in QuickShop                              │
//! │                                                                         │
//! │  Shell line ──► Command Function ──► Result<T, ApiError>               │
//! │                       │                                                 │
//! │                       ├── ValidationError ──► CoreError ──┐            │
//! │                       │                                   ▼            │
//! │                       ├── CoreError::StoreMismatch ──► ApiError ─────► │
//! │                       │                                                 │
//! │                       └── Success ────────────────────────────────────► │
//! │                                                                         │
//! │  The shell prints `message`; JSON output also carries `code`.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use quickshop_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CART_ERROR",
///   "message": "Your cart already has items from another store"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Payment processing error
    PaymentError,

    /// Caller is not allowed to perform the operation
    Forbidden,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Forbidden, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// The message shown when a scan hits a cart from another store.
    pub fn store_mismatch() -> Self {
        ApiError::cart(
            "Your cart already has items from another store. Clear the cart to shop here.",
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::StoreMismatch { .. } => ApiError::store_mismatch(),
            CoreError::EmptyCart => ApiError::new(
                ErrorCode::PaymentError,
                "Please add items to your cart before proceeding to payment",
            ),
            CoreError::StoreNotFound(id) => ApiError::not_found("Store", &id),
            CoreError::NothingToScan => ApiError::cart("No products available to scan"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Response serialization failed: {}", err);
        ApiError::internal("Could not render response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result alias for command functions.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_mismatch_maps_to_cart_error() {
        let err: ApiError = CoreError::StoreMismatch {
            cart_store: "1".to_string(),
            product_store: "2".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err: ApiError = ValidationError::Required {
            field: "email".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "email is required");
    }

    #[test]
    fn test_serialized_code() {
        let json = serde_json::to_value(ApiError::not_found("Store", "9")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Store not found: 9");
    }
}
