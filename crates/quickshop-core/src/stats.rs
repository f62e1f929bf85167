//! # Admin Statistics
//!
//! Derives the admin dashboard figures from purchase history.
//!
//! ```text
//! purchases (most recent first)
//!     │
//!     ├── date == today ──► revenue, order count, average order value
//!     │
//!     ├── all lines, merged by product id ──► top 5 by quantity
//!     │
//!     └── first 10 ──► recent orders
//! ```
//!
//! "Today" is a date label supplied by the caller, so these functions stay
//! free of clock reads.

use crate::money::Money;
use crate::types::{AdminData, CartItem, Purchase, StoreStats};
use crate::{POPULAR_PRODUCTS_LIMIT, RECENT_ORDERS_LIMIT};

/// Purchases whose date label equals `today`, in history order.
pub fn todays_purchases<'a>(
    purchases: &'a [Purchase],
    today: &'a str,
) -> impl Iterator<Item = &'a Purchase> + 'a {
    purchases.iter().filter(move |p| p.date == today)
}

/// Revenue, order count and average order value for `today`, plus the
/// all-time popular products.
pub fn store_stats(purchases: &[Purchase], today: &str) -> StoreStats {
    let (total_revenue, total_orders) = todays_purchases(purchases, today)
        .fold((Money::zero(), 0usize), |(revenue, count), p| (revenue + p.total, count + 1));

    StoreStats {
        total_revenue,
        total_orders,
        average_order_value: total_revenue.average_over(total_orders),
        popular_products: popular_products(purchases, POPULAR_PRODUCTS_LIMIT),
    }
}

/// Merges every purchased line by product id, summing quantities, and
/// returns the `limit` best sellers by descending quantity.
///
/// Ties keep the order in which the products first appear in `purchases`.
pub fn popular_products(purchases: &[Purchase], limit: usize) -> Vec<CartItem> {
    let mut merged: Vec<CartItem> = Vec::new();

    for item in purchases.iter().flat_map(|p| p.items.iter()) {
        match merged.iter_mut().find(|m| m.product.id == item.product.id) {
            Some(existing) => existing.quantity += item.quantity,
            None => merged.push(item.clone()),
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    merged.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    merged.truncate(limit);
    merged
}

/// Full dashboard snapshot.
pub fn compute_admin_data(purchases: &[Purchase], today: &str) -> AdminData {
    AdminData {
        store_stats: store_stats(purchases, today),
        recent_orders: purchases.iter().take(RECENT_ORDERS_LIMIT).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaymentMethod, Product};

    const TODAY: &str = "10/17/2026";
    const YESTERDAY: &str = "10/16/2026";

    fn line(product_id: &str, quantity: u32, price_cents: i64) -> CartItem {
        CartItem {
            product: Product {
                id: product_id.to_string(),
                name: format!("Product {}", product_id),
                price: Money::from_cents(price_cents),
                store_id: "1".to_string(),
                store_name: "Fashion Hub Mall".to_string(),
                image: String::new(),
                can_try_on: false,
            },
            quantity,
        }
    }

    fn purchase(id: &str, date: &str, items: Vec<CartItem>) -> Purchase {
        let total = items.iter().map(CartItem::line_total).sum();
        Purchase {
            id: id.to_string(),
            items,
            total,
            date: date.to_string(),
            confirmation_code: "ABC123XYZ".to_string(),
            store_name: "Fashion Hub Mall".to_string(),
            payment_method: PaymentMethod::Upi,
        }
    }

    #[test]
    fn test_average_of_three_orders() {
        let purchases = vec![
            purchase("3", TODAY, vec![line("1", 1, 5000)]),
            purchase("2", TODAY, vec![line("1", 1, 10000)]),
            purchase("1", TODAY, vec![line("2", 1, 15000)]),
        ];

        let stats = store_stats(&purchases, TODAY);

        assert_eq!(stats.total_revenue.cents(), 30000);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.average_order_value.cents(), 10000);
    }

    #[test]
    fn test_no_orders_today() {
        let purchases = vec![purchase("1", YESTERDAY, vec![line("1", 2, 8999)])];

        let stats = store_stats(&purchases, TODAY);

        assert_eq!(stats.total_revenue, Money::zero());
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.average_order_value, Money::zero());
        // Popular products still count every day's sales
        assert_eq!(stats.popular_products.len(), 1);
        assert_eq!(stats.popular_products[0].quantity, 2);
    }

    #[test]
    fn test_only_todays_orders_count_towards_revenue() {
        let purchases = vec![
            purchase("2", TODAY, vec![line("1", 1, 1000)]),
            purchase("1", YESTERDAY, vec![line("1", 1, 99999)]),
        ];

        let stats = store_stats(&purchases, TODAY);

        assert_eq!(stats.total_revenue.cents(), 1000);
        assert_eq!(stats.total_orders, 1);
    }

    #[test]
    fn test_popular_products_merged_and_sorted() {
        let purchases = vec![
            purchase("2", TODAY, vec![line("a", 1, 100), line("b", 4, 100)]),
            purchase("1", TODAY, vec![line("a", 5, 100), line("c", 2, 100)]),
        ];

        let popular = popular_products(&purchases, 5);
        let summary: Vec<(&str, u32)> = popular
            .iter()
            .map(|i| (i.product.id.as_str(), i.quantity))
            .collect();

        assert_eq!(summary, vec![("a", 6), ("b", 4), ("c", 2)]);
    }

    #[test]
    fn test_popular_products_capped_at_limit() {
        let items: Vec<CartItem> = (1..=7u32).map(|n| line(&n.to_string(), n, 100)).collect();
        let purchases = vec![purchase("1", TODAY, items)];

        let stats = store_stats(&purchases, TODAY);

        assert_eq!(stats.popular_products.len(), POPULAR_PRODUCTS_LIMIT);
        let quantities: Vec<u32> = stats.popular_products.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_popular_products_ties_keep_first_seen_order() {
        let purchases = vec![purchase("1", TODAY, vec![line("x", 1, 100), line("y", 1, 100)])];

        let popular = popular_products(&purchases, 5);

        assert_eq!(popular[0].product.id, "x");
        assert_eq!(popular[1].product.id, "y");
    }

    #[test]
    fn test_recent_orders_capped() {
        let purchases: Vec<Purchase> = (0..12)
            .rev()
            .map(|n| purchase(&n.to_string(), TODAY, vec![line("1", 1, 100)]))
            .collect();

        let data = compute_admin_data(&purchases, TODAY);

        assert_eq!(data.recent_orders.len(), RECENT_ORDERS_LIMIT);
        assert_eq!(data.recent_orders[0].id, "11");
        assert_eq!(data.store_stats.total_orders, 12);
    }

    #[test]
    fn test_empty_history() {
        let data = compute_admin_data(&[], TODAY);
        assert_eq!(data, AdminData::default());
    }
}
