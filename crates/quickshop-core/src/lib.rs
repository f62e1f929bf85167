//! # quickshop-core: Pure Business Logic for QuickShop
//!
//! This crate holds every rule of the scan-and-go shopping flow as plain
//! data types and functions with zero I/O. The app crate owns the session
//! state and calls into this crate for anything that has an invariant.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        QuickShop Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Shell / Mobile Frontend                      │   │
//! │  │    Login ──► Stores ──► Scan ──► Cart ──► Pay ──► Dashboard     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Commands + AppState (apps/quickshop)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ quickshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │  stats  │ │ catalog │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBAL STATE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Store, Product, Purchase, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart with the single-store rule
//! - [`stats`] - Admin dashboard aggregates
//! - [`catalog`] - Read-only store and product fixtures
//! - [`receipt`] - Confirmation codes, purchase ids and date labels
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use quickshop_core::{Cart, Catalog};
//!
//! let catalog = Catalog::demo();
//! let jacket = catalog.product("1").unwrap();
//! let headphones = catalog.product("3").unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(jacket).unwrap();
//!
//! // Headphones come from another store, so the cart refuses them.
//! assert!(cart.add_item(headphones).is_err());
//! assert_eq!(cart.total_quantity(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod receipt;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of entries in the admin "popular products" list.
pub const POPULAR_PRODUCTS_LIMIT: usize = 5;

/// Number of purchases kept in the admin "recent orders" list.
pub const RECENT_ORDERS_LIMIT: usize = 10;

/// Number of today's orders shown on the admin dashboard.
pub const DASHBOARD_ORDERS_LIMIT: usize = 5;

/// Length of a purchase confirmation code.
pub const CONFIRMATION_CODE_LEN: usize = 9;

/// Store name recorded on a purchase made without a selected store.
pub const UNKNOWN_STORE_NAME: &str = "Unknown Store";
