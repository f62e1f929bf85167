//! # QuickShop Entry Point
//!
//! Reads one command per line from stdin and prints one reply per line.
//!
//! ```text
//! $ QUICKSHOP_SEED=7 quickshop
//! login customer john@example.com secret
//! Welcome, John Doe (customer)
//! select 1
//! Shopping at Fashion Hub Mall
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to change the level.

fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for better testability
    quickshop_lib::run()
}
