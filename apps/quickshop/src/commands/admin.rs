//! # Admin Commands
//!
//! The admin dashboard: today's revenue, orders, average order value,
//! best sellers and recent orders.

use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use quickshop_core::stats::todays_purchases;
use quickshop_core::{AdminData, Purchase, DASHBOARD_ORDERS_LIMIT};

/// Dashboard payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Store the admin manages.
    pub store_id: String,
    /// Date label the figures were computed for.
    pub date: String,
    pub admin_data: AdminData,
    /// Today's orders, most recent first.
    pub todays_orders: Vec<Purchase>,
}

/// Builds the admin dashboard.
///
/// ## Errors
/// `FORBIDDEN` unless an admin is logged in.
pub fn dashboard(state: &mut AppState) -> ApiResult<DashboardResponse> {
    debug!("dashboard command");

    let store_id = state
        .user()
        .and_then(|u| u.admin_store_id())
        .map(str::to_string)
        .ok_or_else(|| ApiError::forbidden("The dashboard is only available to admins"))?;

    let today = state.today();
    state.refresh_admin_data_for(&today);

    let todays_orders = todays_purchases(state.purchases(), &today)
        .take(DASHBOARD_ORDERS_LIMIT)
        .cloned()
        .collect();

    Ok(DashboardResponse {
        store_id,
        date: today,
        admin_data: state.admin_data().clone(),
        todays_orders,
    })
}
