//! # Cart Commands
//!
//! Simulated scanning and cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Payment  │────►│ Purchase │       │
//! │  │  Cart    │     │          │     │          │     │ recorded │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                   scan_item                     (payment.rs clears)    │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use quickshop_core::validation::validate_id;
use quickshop_core::{CartItem, Catalog, CoreError, Money, Product, Store};

/// Store scanned from when the shopper has not picked one.
const FALLBACK_STORE_ID: &str = "1";

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub store: Option<Store>,
    pub items: Vec<CartItem>,
    pub item_count: usize,
    pub total_quantity: u32,
    pub total: Money,
    /// Product ids that offer the AR try-on view.
    pub try_on_product_ids: Vec<String>,
}

impl From<&AppState> for CartResponse {
    fn from(state: &AppState) -> Self {
        let cart = state.cart();
        CartResponse {
            store: state.current_store().cloned(),
            items: cart.items().to_vec(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
            try_on_product_ids: cart.try_on_items().map(|i| i.product.id.clone()).collect(),
        }
    }
}

/// Result of a simulated scan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub product: Product,
    pub cart: CartResponse,
}

/// Gets the current cart contents.
pub fn get_cart(state: &AppState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(state)
}

/// Simulates scanning a barcode on the shelf.
///
/// ## Behavior
/// - Picks a random product of the current store (store "1" when none is
///   selected); falls back to the whole catalog if that store sells nothing
/// - Adds it to the cart
/// - A product from a store other than the cart's is refused
pub fn scan_item<R: Rng + ?Sized>(
    state: &mut AppState,
    catalog: &Catalog,
    rng: &mut R,
) -> ApiResult<ScanResponse> {
    let store_id = state
        .current_store()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| FALLBACK_STORE_ID.to_string());
    debug!(store_id = %store_id, "scan_item command");

    let candidates: Vec<&Product> = catalog.products_for_store(&store_id).collect();
    let picked = if candidates.is_empty() {
        catalog.products().choose(rng)
    } else {
        candidates.choose(rng).copied()
    };
    let product = picked.cloned().ok_or(CoreError::NothingToScan)?;

    if !state.add_to_cart(&product) {
        return Err(ApiError::store_mismatch());
    }
    info!(product_id = %product.id, product = %product.name, "Item scanned");

    Ok(ScanResponse {
        product,
        cart: CartResponse::from(&*state),
    })
}

/// Removes an item from the cart. Unknown ids leave the cart as it is.
pub fn remove_from_cart(state: &mut AppState, product_id: &str) -> ApiResult<CartResponse> {
    debug!(product_id = %product_id, "remove_from_cart command");

    let product_id = validate_id("product id", product_id)?;
    state.remove_from_cart(&product_id);

    Ok(CartResponse::from(&*state))
}

/// Clears all items from the cart.
pub fn clear_cart(state: &mut AppState) -> CartResponse {
    debug!("clear_cart command");

    state.clear_cart();
    CartResponse::from(&*state)
}
