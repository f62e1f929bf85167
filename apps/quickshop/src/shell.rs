//! # Shell
//!
//! Line-oriented driver for a QuickShop session: one command per line,
//! one reply per command.
//!
//! ```text
//! > login customer john@example.com password123
//! > stores fresh
//! > select 3
//! > scan
//! > pay upi
//! > history
//! ```

use std::io::{BufRead, Write};

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::commands::admin::DashboardResponse;
use crate::commands::cart::{CartResponse, ScanResponse};
use crate::commands::{admin, cart, payment, session, store};
use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, ConfigState, OutputFormat};
use quickshop_core::{Catalog, LoginKind, PaymentMethod, Purchase, Store, User};

const HELP: &str = "\
commands:
  login <customer|admin> <email> <password>
  logout
  stores [query]
  select <store id>
  scan
  cart
  remove <product id>
  clear
  pay <upi|card|wallet>
  history
  dashboard
  help
  quit";

// =============================================================================
// Parsing
// =============================================================================

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login {
        kind: LoginKind,
        email: String,
        password: String,
    },
    Logout,
    Stores(String),
    Select(String),
    Scan,
    Cart,
    Remove(String),
    Clear,
    Pay(PaymentMethod),
    History,
    Dashboard,
    Help,
    Quit,
}

impl Command {
    /// Parses one line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> ApiResult<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (name.to_lowercase().as_str(), rest.as_slice()) {
            ("login", [kind, email, password]) => Command::Login {
                kind: kind.parse()?,
                email: email.to_string(),
                password: password.to_string(),
            },
            ("login", _) => return Err(usage("login <customer|admin> <email> <password>")),
            ("logout", []) => Command::Logout,
            ("stores", query) => Command::Stores(query.join(" ")),
            ("select", [id]) => Command::Select(id.to_string()),
            ("select", _) => return Err(usage("select <store id>")),
            ("scan", []) => Command::Scan,
            ("cart", []) => Command::Cart,
            ("remove", [id]) => Command::Remove(id.to_string()),
            ("remove", _) => return Err(usage("remove <product id>")),
            ("clear", []) => Command::Clear,
            ("pay", [method]) => Command::Pay(method.parse()?),
            ("pay", _) => return Err(usage("pay <upi|card|wallet>")),
            ("history", []) => Command::History,
            ("dashboard", []) => Command::Dashboard,
            ("help", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            (other, _) => {
                return Err(ApiError::validation(format!(
                    "Unknown command '{}', try 'help'",
                    other
                )))
            }
        };

        Ok(Some(command))
    }

    /// The keyword that invokes this command. Used in logs instead of
    /// `Debug`, which would print the login password.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::Stores(_) => "stores",
            Command::Select(_) => "select",
            Command::Scan => "scan",
            Command::Cart => "cart",
            Command::Remove(_) => "remove",
            Command::Clear => "clear",
            Command::Pay(_) => "pay",
            Command::History => "history",
            Command::Dashboard => "dashboard",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn usage(text: &str) -> ApiError {
    ApiError::validation(format!("usage: {}", text))
}

// =============================================================================
// Replies
// =============================================================================

/// What a command produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Reply {
    LoggedIn(User),
    LoggedOut,
    Stores(Vec<Store>),
    StoreSelected(Store),
    Scanned(ScanResponse),
    Cart(CartResponse),
    Paid(Purchase),
    History(Vec<Purchase>),
    Dashboard(DashboardResponse),
    Help,
}

impl Reply {
    /// Human-readable rendering.
    pub fn to_text(&self, config: &ConfigState) -> String {
        let money = |m| config.format_currency(m);

        match self {
            Reply::LoggedIn(user) => {
                let role = if user.is_admin() { "admin" } else { "customer" };
                format!("Welcome, {} ({})", user.name, role)
            }
            Reply::LoggedOut => "Logged out".to_string(),
            Reply::Stores(stores) if stores.is_empty() => "No stores found".to_string(),
            Reply::Stores(stores) => stores
                .iter()
                .map(|s| format!("[{}] {} - {} ({})", s.id, s.name, s.address, s.distance))
                .collect::<Vec<_>>()
                .join("\n"),
            Reply::StoreSelected(store) => format!("Shopping at {}", store.name),
            Reply::Scanned(scan) => format!(
                "Item added: {} ({}). Cart total {}",
                scan.product.name,
                money(scan.product.price),
                money(scan.cart.total)
            ),
            Reply::Cart(cart) => render_cart(cart, config),
            Reply::Paid(purchase) => format!(
                "Payment successful: {} via {}\nConfirmation code: {}\nShow this code at the store exit",
                money(purchase.total),
                purchase.payment_method,
                purchase.confirmation_code
            ),
            Reply::History(purchases) if purchases.is_empty() => "No purchases yet".to_string(),
            Reply::History(purchases) => purchases
                .iter()
                .map(|p| {
                    format!(
                        "{} {} {} items {} code {}",
                        p.date,
                        p.store_name,
                        p.total_quantity(),
                        money(p.total),
                        p.confirmation_code
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Reply::Dashboard(board) => render_dashboard(board, config),
            Reply::Help => HELP.to_string(),
        }
    }
}

fn render_cart(cart: &CartResponse, config: &ConfigState) -> String {
    if cart.items.is_empty() {
        return "Your cart is empty".to_string();
    }

    let mut lines: Vec<String> = cart
        .items
        .iter()
        .map(|i| {
            let try_on = if i.product.can_try_on { " [AR try-on]" } else { "" };
            format!(
                "[{}] {} x{} {}{}",
                i.product.id,
                i.product.name,
                i.quantity,
                config.format_currency(i.line_total()),
                try_on
            )
        })
        .collect();
    lines.push(format!("Total: {}", config.format_currency(cart.total)));
    lines.join("\n")
}

fn render_dashboard(board: &DashboardResponse, config: &ConfigState) -> String {
    let stats = &board.admin_data.store_stats;
    let mut lines = vec![
        format!("Dashboard for store {} on {}", board.store_id, board.date),
        format!("Revenue today: {}", config.format_currency(stats.total_revenue)),
        format!("Orders today: {}", stats.total_orders),
        format!("Average order: {}", config.format_currency(stats.average_order_value)),
    ];

    if !stats.popular_products.is_empty() {
        lines.push("Popular products:".to_string());
        lines.extend(
            stats
                .popular_products
                .iter()
                .map(|i| format!("  {} x{}", i.product.name, i.quantity)),
        );
    }

    if board.todays_orders.is_empty() {
        lines.push("No orders today".to_string());
    } else {
        lines.push("Recent orders:".to_string());
        lines.extend(board.todays_orders.iter().map(|p| {
            format!(
                "  #{} {} {}",
                p.confirmation_code,
                p.store_name,
                config.format_currency(p.total)
            )
        }));
    }

    lines.join("\n")
}

// =============================================================================
// Shell
// =============================================================================

/// Owns everything a session needs and dispatches commands against it.
pub struct Shell<R> {
    state: AppState,
    catalog: Catalog,
    config: ConfigState,
    rng: R,
}

impl<R: Rng> Shell<R> {
    /// Creates a logged-out shell over `catalog`.
    pub fn new(catalog: Catalog, config: ConfigState, rng: R) -> Self {
        Shell {
            state: AppState::new(),
            catalog,
            config,
            rng,
        }
    }

    /// The session state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs one parsed command. `Quit` yields `None`.
    pub fn dispatch(&mut self, command: Command) -> ApiResult<Option<Reply>> {
        debug!(command = command.name(), "dispatch");

        let reply = match command {
            Command::Login {
                kind,
                email,
                password,
            } => Reply::LoggedIn(session::login(
                &mut self.state,
                &self.config,
                &email,
                &password,
                kind,
            )?),
            Command::Logout => {
                session::logout(&mut self.state);
                Reply::LoggedOut
            }
            Command::Stores(query) => Reply::Stores(store::search_stores(&self.catalog, &query)?),
            Command::Select(id) => {
                Reply::StoreSelected(store::select_store(&mut self.state, &self.catalog, &id)?)
            }
            Command::Scan => Reply::Scanned(cart::scan_item(
                &mut self.state,
                &self.catalog,
                &mut self.rng,
            )?),
            Command::Cart => Reply::Cart(cart::get_cart(&self.state)),
            Command::Remove(id) => Reply::Cart(cart::remove_from_cart(&mut self.state, &id)?),
            Command::Clear => Reply::Cart(cart::clear_cart(&mut self.state)),
            Command::Pay(method) => {
                Reply::Paid(payment::process_payment(&mut self.state, method, &mut self.rng)?)
            }
            Command::History => Reply::History(payment::purchase_history(&self.state)),
            Command::Dashboard => Reply::Dashboard(admin::dashboard(&mut self.state)?),
            Command::Help => Reply::Help,
            Command::Quit => return Ok(None),
        };

        Ok(Some(reply))
    }

    /// Renders a successful reply in the configured output format.
    fn render_reply(&self, reply: &Reply) -> ApiResult<String> {
        match self.config.output {
            OutputFormat::Text => Ok(reply.to_text(&self.config)),
            OutputFormat::Json => Ok(serde_json::to_string(reply)?),
        }
    }

    /// Renders an error in the configured output format.
    fn render_error(&self, err: &ApiError) -> String {
        match self.config.output {
            OutputFormat::Text => format!("Error: {}", err.message),
            OutputFormat::Json => serde_json::json!({ "error": err }).to_string(),
        }
    }

    /// Reads commands from `input` until EOF or `quit`, writing one reply
    /// per command to `output`.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;

            let rendered = match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => match self.dispatch(command) {
                    Ok(None) => break,
                    Ok(Some(reply)) => self.render_reply(&reply),
                    Err(e) => Err(e),
                },
                Err(e) => Err(e),
            };

            let text = rendered.unwrap_or_else(|e| self.render_error(&e));
            writeln!(output, "{}", text)?;
            output.flush()?;
        }

        Ok(())
    }
}
