//! # QuickShop Library
//!
//! Core library for the QuickShop scan-and-go session.
//! This is the main entry point that wires configuration, state and the shell.
//!
//! ## Module Organization
//! ```text
//! quickshop_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── shell.rs        ◄─── Line parser and dispatcher
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── app.rs      ◄─── AppState: user, store, cart, purchases, admin data
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── Login/logout
//! │   ├── store.rs    ◄─── Store search and selection
//! │   ├── cart.rs     ◄─── Scan and cart manipulation
//! │   ├── payment.rs  ◄─── Checkout and history
//! │   └── admin.rs    ◄─── Admin dashboard
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State                                        │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    AppState      │ │    Catalog       │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • User          │ │  • Stores        │ │  • Currency symbol   │   │
//! │  │  • Current store │ │  • Products      │ │  • Admin store id    │   │
//! │  │  • Cart          │ │                  │ │  • RNG seed          │   │
//! │  │  • Purchases     │ │  (read-only)     │ │  • Output format     │   │
//! │  │  • Admin data    │ │                  │ │                      │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  One session, one thread: commands take `&mut AppState` directly.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quickshop_core::Catalog;
use shell::Shell;
use state::ConfigState;

/// Runs an interactive session over stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, so stdout stays clean for replies)
/// 2. Load configuration from `QUICKSHOP_*` variables
/// 3. Load the demo catalog
/// 4. Seed the session RNG (`QUICKSHOP_SEED` or entropy)
/// 5. Read commands until EOF or `quit`
pub fn run() -> io::Result<()> {
    init_tracing();
    info!("Starting QuickShop");

    let config = ConfigState::from_env();
    let catalog = Catalog::demo();
    info!(
        stores = catalog.stores().len(),
        products = catalog.products().len(),
        "Catalog loaded"
    );

    let rng = match config.rng_seed {
        Some(seed) => {
            info!(seed, "Using fixed RNG seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut shell = Shell::new(catalog, config, rng);
    let stdin = io::stdin();
    shell.run(stdin.lock(), io::stdout().lock())?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every dispatched command
/// - `RUST_LOG=quickshop=trace` - Trace for quickshop crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
