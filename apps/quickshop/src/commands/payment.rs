//! # Payment Commands
//!
//! Simulated checkout and purchase history.
//!
//! ## Checkout Flow
//! ```text
//! pay upi
//!    │
//!    ▼
//! cart empty? ──yes──► PAYMENT_ERROR "Please add items..."
//!    │ no
//!    ▼
//! build Purchase (snapshot, total, today's label, confirmation code)
//!    │
//!    ▼
//! add_purchase ──► clear_cart ──► show code at the store exit
//! ```

use chrono::Local;
use rand::Rng;
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::AppState;
use quickshop_core::receipt::{build_purchase, generate_confirmation_code};
use quickshop_core::{PaymentMethod, Purchase};

/// Pays for the cart with the chosen method.
///
/// Payment always succeeds; there is no processor behind it.
pub fn process_payment<R: Rng + ?Sized>(
    state: &mut AppState,
    method: PaymentMethod,
    rng: &mut R,
) -> ApiResult<Purchase> {
    debug!(method = ?method, "process_payment command");

    let purchase = build_purchase(
        state.cart(),
        state.current_store().map(|s| s.name.as_str()),
        method,
        &Local::now(),
        generate_confirmation_code(rng),
    )?;

    state.add_purchase(purchase.clone());
    state.clear_cart();

    info!(
        purchase_id = %purchase.id,
        total = %purchase.total,
        items = purchase.items.len(),
        code = %purchase.confirmation_code,
        "Purchase completed"
    );

    Ok(purchase)
}

/// Purchases made this session, most recent first.
pub fn purchase_history(state: &AppState) -> Vec<Purchase> {
    debug!("purchase_history command");
    state.purchases().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::today_label;
    use quickshop_core::{Catalog, UNKNOWN_STORE_NAME};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_payment_records_purchase_and_clears_cart() {
        let catalog = Catalog::demo();
        let mut state = AppState::new();
        state.set_current_store(catalog.store("1").cloned());
        state.add_to_cart(catalog.product("1").unwrap());
        state.add_to_cart(catalog.product("2").unwrap());
        let mut rng = StdRng::seed_from_u64(5);

        let before = today_label();
        let purchase = process_payment(&mut state, PaymentMethod::Card, &mut rng).unwrap();
        let after = today_label();

        assert_eq!(purchase.total.cents(), 8999 + 2499);
        assert_eq!(purchase.items.len(), 2);
        assert_eq!(purchase.store_name, "Fashion Hub Mall");
        // The checkout may straddle midnight
        assert!(purchase.date == before || purchase.date == after);
        assert_eq!(purchase.confirmation_code.len(), 9);
        assert!(state.cart().is_empty());
        assert_eq!(purchase_history(&state), vec![purchase]);
    }

    #[test]
    fn test_payment_on_empty_cart() {
        let mut state = AppState::new();

        let mut rng = StdRng::seed_from_u64(5);

        let err = process_payment(&mut state, PaymentMethod::Upi, &mut rng).unwrap_err();

        assert_eq!(err.code, ErrorCode::PaymentError);
        assert!(state.purchases().is_empty());
    }

    #[test]
    fn test_payment_without_store() {
        let catalog = Catalog::demo();
        let mut state = AppState::new();
        state.add_to_cart(catalog.product("5").unwrap());

        let mut rng = StdRng::seed_from_u64(5);

        let purchase = process_payment(&mut state, PaymentMethod::Wallet, &mut rng).unwrap();

        assert_eq!(purchase.store_name, UNKNOWN_STORE_NAME);
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let catalog = Catalog::demo();
        let mut state = AppState::new();
        let mut rng = StdRng::seed_from_u64(11);

        state.add_to_cart(catalog.product("5").unwrap());
        let first = process_payment(&mut state, PaymentMethod::Upi, &mut rng).unwrap();
        state.add_to_cart(catalog.product("6").unwrap());
        let second = process_payment(&mut state, PaymentMethod::Upi, &mut rng).unwrap();

        let history = purchase_history(&state);
        assert_eq!(history, vec![second, first]);
    }
}
