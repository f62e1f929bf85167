//! # Session Commands
//!
//! Prototype login and logout. Any filled-in form logs in; the account
//! kind picks which demo identity is used.

use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::{AppState, ConfigState};
use quickshop_core::validation::validate_credentials;
use quickshop_core::{LoginKind, Role, User};

/// Logs in as a demo customer or admin.
///
/// ## Behavior
/// - Email and password are required; nothing else is checked
/// - Customers become "John Doe"
/// - Admins become "Store Administrator" scoped to `config.admin_store_id`
pub fn login(
    state: &mut AppState,
    config: &ConfigState,
    email: &str,
    password: &str,
    kind: LoginKind,
) -> ApiResult<User> {
    debug!(email = %email, kind = ?kind, "login command");

    validate_credentials(email, password)?;

    let email = email.trim().to_string();
    let user = match kind {
        LoginKind::Admin => User {
            id: "admin1".to_string(),
            name: "Store Administrator".to_string(),
            email,
            photo: None,
            role: Role::Admin {
                store_id: config.admin_store_id.clone(),
            },
        },
        LoginKind::Customer => User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email,
            photo: None,
            role: Role::Customer,
        },
    };

    state.set_user(Some(user.clone()));
    info!(user_id = %user.id, admin = user.is_admin(), "Logged in");

    Ok(user)
}

/// Logs out: clears the user, the selected store and the cart.
///
/// Purchase history survives for the rest of the process.
pub fn logout(state: &mut AppState) {
    debug!("logout command");

    state.set_user(None);
    state.set_current_store(None);
    state.clear_cart();

    info!("Logged out");
}
