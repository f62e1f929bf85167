//! # Catalog
//!
//! The read-only list of stores and products supplied at process start.
//!
//! [`Catalog::demo`] returns the fixture set the prototype ships with:
//! four nearby stores and six products.

use serde::Serialize;

use crate::money::Money;
use crate::types::{Product, Store};

/// Read-only store and product catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    stores: Vec<Store>,
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from explicit fixture lists.
    pub fn new(stores: Vec<Store>, products: Vec<Product>) -> Self {
        Catalog { stores, products }
    }

    /// The built-in demo fixtures.
    pub fn demo() -> Self {
        let stores = vec![
            store("1", "Fashion Hub Mall", "0.8 km", "123 Shopping Street, Downtown"),
            store("2", "TechMart Electronics", "1.2 km", "456 Tech Avenue, City Center"),
            store("3", "Fresh Grocery Plus", "2.1 km", "789 Market Road, Suburb"),
            store("4", "Sports Zone", "3.5 km", "321 Athletic Boulevard, North District"),
        ];

        let products = vec![
            product("1", "Blue Denim Jacket", 8999, &stores[0], "1040945", true),
            product("2", "White Cotton T-Shirt", 2499, &stores[0], "8532616", true),
            product("3", "Wireless Headphones", 14999, &stores[1], "3394659", false),
            product("4", "Smart Fitness Watch", 29999, &stores[1], "437037", false),
            product("5", "Organic Bananas", 399, &stores[2], "2316466", false),
            product("6", "Running Shoes", 12999, &stores[3], "2529148", false),
        ];

        Catalog::new(stores, products)
    }

    /// All stores.
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// All products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a store by id.
    pub fn store(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products sold by `store_id`.
    pub fn products_for_store<'a>(
        &'a self,
        store_id: &'a str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.store_id == store_id)
    }

    /// Stores whose name contains `query`, ignoring case. An empty query
    /// matches every store.
    pub fn search_stores(&self, query: &str) -> Vec<&Store> {
        let needle = query.to_lowercase();
        self.stores
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect()
    }
}

fn store(id: &str, name: &str, distance: &str, address: &str) -> Store {
    Store {
        id: id.to_string(),
        name: name.to_string(),
        distance: distance.to_string(),
        address: address.to_string(),
    }
}

fn product(
    id: &str,
    name: &str,
    price_cents: i64,
    store: &Store,
    photo_id: &str,
    can_try_on: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_cents(price_cents),
        store_id: store.id.clone(),
        store_name: store.name.clone(),
        image: format!(
            "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=400",
            id = photo_id
        ),
        can_try_on,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_fixture_shape() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.stores().len(), 4);
        assert_eq!(catalog.products().len(), 6);

        let bananas = catalog.product("5").unwrap();
        assert_eq!(bananas.price.cents(), 399);
        assert_eq!(bananas.store_name, "Fresh Grocery Plus");
    }

    #[test]
    fn test_products_carry_their_store_name() {
        let catalog = Catalog::demo();
        for product in catalog.products() {
            let store = catalog.store(&product.store_id).unwrap();
            assert_eq!(product.store_name, store.name);
        }
    }

    #[test]
    fn test_products_for_store() {
        let catalog = Catalog::demo();
        let ids: Vec<&str> = catalog.products_for_store("2").map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert_eq!(catalog.products_for_store("99").count(), 0);
    }

    #[test]
    fn test_search_stores_case_insensitive() {
        let catalog = Catalog::demo();

        let hits = catalog.search_stores("tech");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        assert_eq!(catalog.search_stores("").len(), 4);
        assert!(catalog.search_stores("bakery").is_empty());
    }

    #[test]
    fn test_unknown_ids() {
        let catalog = Catalog::demo();
        assert!(catalog.store("9").is_none());
        assert!(catalog.product("9").is_none());
    }
}
