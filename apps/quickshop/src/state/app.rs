//! # Session State
//!
//! The single owned state of a QuickShop session.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppState Operations                                  │
//! │                                                                         │
//! │  Shell Action            Command                 State Change           │
//! │  ────────────            ───────                 ────────────           │
//! │                                                                         │
//! │  login ──────────────► session::login ───────► set_user(Some)          │
//! │  select <store> ─────► store::select_store ──► clear_cart + set store  │
//! │  scan ───────────────► cart::scan_item ──────► add_to_cart             │
//! │  remove <id> ────────► cart::remove ─────────► remove_from_cart        │
//! │  pay <method> ───────► payment::process ─────► add_purchase + clear    │
//! │  dashboard ──────────► admin::dashboard ─────► refresh_admin_data      │
//! │  logout ─────────────► session::logout ──────► user, store, cart reset │
//! │                                                                         │
//! │  One caller, one call at a time: commands borrow the state `&mut`.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use serde::Serialize;
use tracing::{debug, warn};

use quickshop_core::receipt::date_label;
use quickshop_core::stats::compute_admin_data;
use quickshop_core::{AdminData, Cart, Product, Purchase, Store, User};

/// Today's date label in local time.
pub fn today_label() -> String {
    date_label(Local::now().date_naive())
}

/// Everything a session knows: who is logged in, where they shop, what is
/// in the cart and what has been bought.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    user: Option<User>,
    current_store: Option<Store>,
    cart: Cart,
    /// Most recent first.
    purchases: Vec<Purchase>,
    admin_data: AdminData,
    /// Date label the aggregates use instead of the local clock.
    #[serde(skip)]
    pinned_today: Option<String>,
}

impl AppState {
    /// Creates an empty, logged-out session.
    pub fn new() -> Self {
        AppState::default()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Replaces the current identity. No validation is performed.
    ///
    /// Admin aggregates are refreshed when an admin logs in.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
        if self.is_admin() {
            self.refresh_admin_data();
        }
    }

    /// Replaces the active store selection.
    pub fn set_current_store(&mut self, store: Option<Store>) {
        self.current_store = store;
    }

    /// Adds one unit of `product` to the cart.
    ///
    /// Returns `false`, leaving the cart unchanged, when the cart already
    /// holds items from a different store.
    pub fn add_to_cart(&mut self, product: &Product) -> bool {
        match self.cart.add_item(product) {
            Ok(()) => {
                debug!(product_id = %product.id, store_id = %product.store_id, "Added to cart");
                true
            }
            Err(e) => {
                warn!(product_id = %product.id, error = %e, "Rejected cart insertion");
                false
            }
        }
    }

    /// Removes the cart line for `product_id`; no-op when absent.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove_item(product_id);
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Prepends a completed purchase to history.
    ///
    /// When an admin is active the aggregates are recomputed from the
    /// updated history, so they include this purchase.
    pub fn add_purchase(&mut self, purchase: Purchase) {
        self.purchases.insert(0, purchase);
        if self.is_admin() {
            self.refresh_admin_data();
        }
    }

    /// Recomputes the admin aggregates for today's date.
    pub fn refresh_admin_data(&mut self) {
        let today = self.today();
        self.refresh_admin_data_for(&today);
    }

    /// Fixes the date label treated as "today" by the admin aggregates and
    /// the dashboard. `None` goes back to the local clock.
    pub fn pin_today(&mut self, label: Option<String>) {
        self.pinned_today = label;
    }

    /// Recomputes the admin aggregates for the given date label.
    pub fn refresh_admin_data_for(&mut self, today: &str) {
        self.admin_data = compute_admin_data(&self.purchases, today);
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The logged-in user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The selected store.
    pub fn current_store(&self) -> Option<&Store> {
        self.current_store.as_ref()
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Purchase history, most recent first.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    /// The date label admin figures are computed for.
    pub fn today(&self) -> String {
        self.pinned_today.clone().unwrap_or_else(today_label)
    }

    /// The last computed admin aggregates.
    pub fn admin_data(&self) -> &AdminData {
        &self.admin_data
    }

    /// Whether anyone is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the logged-in user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}
