//! # Domain Types
//!
//! Core domain types used throughout QuickShop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │      Store      │   │     Product     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, name       │   │  id, name       │   │  id, name       │       │
//! │  │  email          │   │  distance       │   │  price (Money)  │       │
//! │  │  role ──────────┼─┐ │  address        │   │  store_id       │       │
//! │  └─────────────────┘ │ └─────────────────┘   │  can_try_on     │       │
//! │                      │                       └────────┬────────┘       │
//! │  ┌─────────────────┐ │                       ┌────────▼────────┐       │
//! │  │      Role       │◄┘                       │    CartItem     │       │
//! │  │  Customer       │                         │  product + qty  │       │
//! │  │  Admin{store_id}│                         └────────┬────────┘       │
//! │  └─────────────────┘                         ┌────────▼────────┐       │
//! │                                              │    Purchase     │       │
//! │  ┌─────────────────┐   ┌─────────────────┐   │  items snapshot │       │
//! │  │   StoreStats    │◄──│    AdminData    │   │  total, date    │       │
//! │  └─────────────────┘   └─────────────────┘   │  code, method   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types serialize with camelCase field names so the mobile frontend
//! reads the same shapes it always has.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// User
// =============================================================================

/// What a logged-in user is allowed to do.
///
/// Admins are scoped to the store they manage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Role {
    /// A shopper.
    Customer,
    /// A store administrator.
    Admin {
        #[serde(rename = "storeId")]
        store_id: String,
    },
}

/// The identity set at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar reference, if the user has one.
    pub photo: Option<String>,
    pub role: Role,
}

impl User {
    /// Returns true for administrators.
    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin { .. })
    }

    /// The store an admin manages; `None` for customers.
    pub fn admin_store_id(&self) -> Option<&str> {
        match &self.role {
            Role::Admin { store_id } => Some(store_id),
            Role::Customer => None,
        }
    }
}

/// Which kind of account a login asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LoginKind {
    #[default]
    Customer,
    Admin,
}

impl FromStr for LoginKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(LoginKind::Customer),
            "admin" => Ok(LoginKind::Admin),
            _ => Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: vec!["customer".to_string(), "admin".to_string()],
            }),
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// A physical store the shopper can pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    /// Human-readable distance label ("0.8 km").
    pub distance: String,
    pub address: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product on a store's shelf. Fixture data, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Money,
    /// Store that sells this product.
    pub store_id: String,
    pub store_name: String,
    /// Image URL.
    pub image: String,
    /// Whether the AR try-on view is offered for this product.
    #[serde(default)]
    pub can_try_on: bool,
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product with a quantity.
///
/// Used for cart lines, for the frozen lines of a purchase and for the
/// aggregated "popular products" entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// A fresh line holding one unit of `product`.
    pub fn new(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Simulated payment options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit/debit card.
    Card,
    /// UPI transfer.
    Upi,
    /// Digital wallet.
    Wallet,
}

impl PaymentMethod {
    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI Payment",
            PaymentMethod::Wallet => "Digital Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "card" | "credit" | "debit" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            "wallet" => Ok(PaymentMethod::Wallet),
            _ => Err(ValidationError::NotAllowed {
                field: "payment method".to_string(),
                allowed: vec!["card".to_string(), "upi".to_string(), "wallet".to_string()],
            }),
        }
    }
}

// =============================================================================
// Purchase
// =============================================================================

/// A completed checkout. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    /// Cart lines frozen at checkout time.
    pub items: Vec<CartItem>,
    pub total: Money,
    /// Date label (`M/D/YYYY`), compared verbatim for "today" stats.
    pub date: String,
    /// Code shown at the store exit.
    pub confirmation_code: String,
    pub store_name: String,
    pub payment_method: PaymentMethod,
}

impl Purchase {
    /// Total number of units bought.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Admin Aggregates
// =============================================================================

/// Today's figures for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_revenue: Money,
    pub total_orders: usize,
    pub average_order_value: Money,
    /// Best sellers across all history, highest quantity first.
    pub popular_products: Vec<CartItem>,
}

/// Everything the admin dashboard reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AdminData {
    pub store_stats: StoreStats,
    /// Most recent purchases first.
    pub recent_orders: Vec<Purchase>,
}

// =============================================================================
// Unit Tests
// =============================================================================
