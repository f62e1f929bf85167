//! # Error Types
//!
//! Domain-specific error types for quickshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quickshop-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  app errors (apps/quickshop)                                           │
//! │  └── ApiError         - What the shell/frontend sees (serialized)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → User                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A product from another store was offered to a non-empty cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart holds items from store 1
    ///      │
    ///      ▼
    /// Scan product owned by store 2
    ///      │
    ///      ▼
    /// StoreMismatch { cart_store: "1", product_store: "2" }
    ///      │
    ///      ▼
    /// UI shows: "Your cart already has items from another store"
    /// ```
    #[error("Cart holds items from store {cart_store}, cannot add a product from store {product_store}")]
    StoreMismatch {
        cart_store: String,
        product_store: String,
    },

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Store id does not exist in the catalog.
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// The catalog has nothing to offer for a scan.
    #[error("No products available to scan")]
    NothingToScan,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
