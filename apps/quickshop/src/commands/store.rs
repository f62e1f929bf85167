//! # Store Commands
//!
//! Store search and selection.
//!
//! ## User Workflow
//! ```text
//! stores "tech" ──► search_stores ──► [TechMart Electronics]
//!                                          │
//! select 2 ─────► select_store ──► clear cart, current store = 2
//! ```

use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::AppState;
use quickshop_core::validation::{validate_id, validate_search_query};
use quickshop_core::{Catalog, CoreError, Store};

/// Stores whose name contains `query` (case-insensitive).
pub fn search_stores(catalog: &Catalog, query: &str) -> ApiResult<Vec<Store>> {
    debug!(query = %query, "search_stores command");

    let query = validate_search_query(query)?;
    Ok(catalog.search_stores(&query).into_iter().cloned().collect())
}

/// Switches the session to `store_id`.
///
/// The cart is emptied first: a cart never outlives its store.
pub fn select_store(state: &mut AppState, catalog: &Catalog, store_id: &str) -> ApiResult<Store> {
    debug!(store_id = %store_id, "select_store command");

    let store_id = validate_id("store id", store_id)?;
    let store = catalog
        .store(&store_id)
        .cloned()
        .ok_or_else(|| CoreError::StoreNotFound(store_id.clone()))?;

    state.clear_cart();
    state.set_current_store(Some(store.clone()));
    info!(store_id = %store.id, store = %store.name, "Store selected");

    Ok(store)
}
