//! # State Module
//!
//! Application state for a QuickShop session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐        │
//! │  │        AppState          │      │       ConfigState        │        │
//! │  │                          │      │                          │        │
//! │  │  user, current_store     │      │  currency, admin store   │        │
//! │  │  cart, purchases         │      │  rng seed, output        │        │
//! │  │  admin_data              │      │                          │        │
//! │  └──────────────────────────┘      └──────────────────────────┘        │
//! │        owned by the shell,               read-only after               │
//! │        lent `&mut` to commands           initialization                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod config;

pub use app::{today_label, AppState};
pub use config::{ConfigState, OutputFormat};
