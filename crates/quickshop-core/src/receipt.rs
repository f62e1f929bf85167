//! # Receipts
//!
//! Turns a paid cart into a [`Purchase`]: purchase ids, date labels and the
//! confirmation code the shopper shows at the store exit.
//!
//! ```text
//! Cart ──► build_purchase(cart, store, method, placed_at, code)
//!                │
//!                ├── id   = placed_at in Unix milliseconds
//!                ├── date = "M/D/YYYY" of placed_at's local date
//!                └── code = 9 chars from [0-9A-Z]
//! ```

use chrono::{DateTime, NaiveDate, TimeZone};
use rand::Rng;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::{PaymentMethod, Purchase};
use crate::{CONFIRMATION_CODE_LEN, UNKNOWN_STORE_NAME};

const CODE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a short random confirmation code.
///
/// Codes are not guaranteed unique.
///
/// ```rust
/// use rand::SeedableRng;
/// use quickshop_core::receipt::generate_confirmation_code;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let code = generate_confirmation_code(&mut rng);
/// assert_eq!(code.len(), 9);
/// ```
pub fn generate_confirmation_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CONFIRMATION_CODE_LEN)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

/// Formats a date the way purchases record it: month/day/year without
/// zero padding.
///
/// ```rust
/// use chrono::NaiveDate;
/// use quickshop_core::receipt::date_label;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
/// assert_eq!(date_label(date), "3/7/2026");
/// ```
pub fn date_label(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Purchase id derived from the checkout instant.
pub fn purchase_id<Tz: TimeZone>(placed_at: &DateTime<Tz>) -> String {
    placed_at.timestamp_millis().to_string()
}

/// Snapshots `cart` into a purchase.
///
/// ## Errors
/// [`CoreError::EmptyCart`] when there is nothing to pay for.
pub fn build_purchase<Tz: TimeZone>(
    cart: &Cart,
    store_name: Option<&str>,
    payment_method: PaymentMethod,
    placed_at: &DateTime<Tz>,
    confirmation_code: String,
) -> CoreResult<Purchase> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    Ok(Purchase {
        id: purchase_id(placed_at),
        items: cart.items().to_vec(),
        total: cart.total(),
        date: date_label(placed_at.date_naive()),
        confirmation_code,
        store_name: store_name.unwrap_or(UNKNOWN_STORE_NAME).to_string(),
        payment_method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Product;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn jacket() -> Product {
        Product {
            id: "1".to_string(),
            name: "Blue Denim Jacket".to_string(),
            price: Money::from_cents(8999),
            store_id: "1".to_string(),
            store_name: "Fashion Hub Mall".to_string(),
            image: String::new(),
            can_try_on: true,
        }
    }

    #[test]
    fn test_confirmation_code_charset() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let code = generate_confirmation_code(&mut rng);
            assert_eq!(code.len(), CONFIRMATION_CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_confirmation_code_deterministic_for_seed() {
        let a = generate_confirmation_code(&mut StdRng::seed_from_u64(1));
        let b = generate_confirmation_code(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_date_label_unpadded() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 7).unwrap();
        assert_eq!(date_label(date), "10/7/2026");
        let date = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
        assert_eq!(date_label(date), "1/17/2026");
    }

    #[test]
    fn test_build_purchase() {
        let mut cart = Cart::new();
        cart.add_item(&jacket()).unwrap();
        cart.add_item(&jacket()).unwrap();
        let placed_at = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();

        let purchase = build_purchase(
            &cart,
            Some("Fashion Hub Mall"),
            PaymentMethod::Card,
            &placed_at,
            "K3Y9QX2MZ".to_string(),
        )
        .unwrap();

        assert_eq!(purchase.id, placed_at.timestamp_millis().to_string());
        assert_eq!(purchase.total.cents(), 17998);
        assert_eq!(purchase.date, "10/17/2026");
        assert_eq!(purchase.items.len(), 1);
        assert_eq!(purchase.total_quantity(), 2);
        assert_eq!(purchase.store_name, "Fashion Hub Mall");
        assert_eq!(purchase.payment_method, PaymentMethod::Card);
    }

    #[test]
    fn test_build_purchase_without_store() {
        let mut cart = Cart::new();
        cart.add_item(&jacket()).unwrap();

        let purchase =
            build_purchase(&cart, None, PaymentMethod::Upi, &Utc::now(), "X".to_string()).unwrap();

        assert_eq!(purchase.store_name, UNKNOWN_STORE_NAME);
    }

    #[test]
    fn test_build_purchase_rejects_empty_cart() {
        let cart = Cart::new();
        let now = Utc::now();
        let code = "X".to_string();
        let err = build_purchase(&cart, None, PaymentMethod::Upi, &now, code).unwrap_err();
        assert_eq!(err, CoreError::EmptyCart);
    }
}
