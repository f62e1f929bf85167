//! # Commands Module
//!
//! Every operation the shell (or any other frontend) can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── Login, logout
//! ├── store.rs    ◄─── Store search and selection
//! ├── cart.rs     ◄─── Scanning and cart manipulation
//! ├── payment.rs  ◄─── Checkout and purchase history
//! └── admin.rs    ◄─── Admin dashboard
//! ```
//!
//! ## State Injection
//! Each command declares only what it needs:
//! ```rust,ignore
//! // Reads the catalog only
//! fn search_stores(catalog: &Catalog, query: &str)
//!
//! // Mutates the session
//! fn remove_from_cart(state: &mut AppState, product_id: &str)
//!
//! // Needs randomness as well
//! fn scan_item<R: Rng>(state: &mut AppState, catalog: &Catalog, rng: &mut R)
//! ```

pub mod admin;
pub mod cart;
pub mod payment;
pub mod session;
pub mod store;
