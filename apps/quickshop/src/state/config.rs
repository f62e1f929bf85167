//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`QUICKSHOP_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use quickshop_core::Money;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Store managed by the admin account created at login
    pub admin_store_id: String,

    /// Fixed seed for scans and confirmation codes (reproducible sessions)
    pub rng_seed: Option<u64>,

    /// How the shell prints command results
    pub output: OutputFormat,
}

/// Shell output style.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,

    /// One JSON document per command
    Json,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Currency: Rs.
    /// - Admin store: "1" (Fashion Hub Mall)
    /// - RNG: seeded from entropy
    /// - Output: text
    fn default() -> Self {
        ConfigState {
            currency_symbol: "Rs.".to_string(),
            admin_store_id: "1".to_string(),
            rng_seed: None,
            output: OutputFormat::Text,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `QUICKSHOP_CURRENCY_SYMBOL`: Override currency symbol
    /// - `QUICKSHOP_ADMIN_STORE_ID`: Store id given to admin logins
    /// - `QUICKSHOP_SEED`: Seed for the session RNG (u64)
    /// - `QUICKSHOP_OUTPUT`: `text` or `json`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup("QUICKSHOP_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(store_id) = lookup("QUICKSHOP_ADMIN_STORE_ID") {
            config.admin_store_id = store_id;
        }

        if let Some(seed_str) = lookup("QUICKSHOP_SEED") {
            match seed_str.trim().parse::<u64>() {
                Ok(seed) => config.rng_seed = Some(seed),
                Err(_) => tracing::warn!(value = %seed_str, "Ignoring invalid QUICKSHOP_SEED"),
            }
        }

        if let Some(output) = lookup("QUICKSHOP_OUTPUT") {
            match output.trim().to_lowercase().as_str() {
                "json" => config.output = OutputFormat::Json,
                "text" => config.output = OutputFormat::Text,
                other => tracing::warn!(value = %other, "Ignoring unknown QUICKSHOP_OUTPUT"),
            }
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use quickshop_lib::state::ConfigState;
    /// use quickshop_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(8999)), "Rs.89.99");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        // Money always carries two decimals; the sign goes before the symbol
        let sign = if amount.cents() < 0 { "-" } else { "" };
        let magnitude = Money::from_cents(amount.cents().abs());
        format!("{}{}{}", sign, self.currency_symbol, magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "Rs.12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "Rs.1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "Rs.0.01");
        assert_eq!(config.format_currency(Money::zero()), "Rs.0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-Rs.12.34");
    }

    #[test]
    fn test_format_currency_ignores_stray_precision() {
        // Precision is fixed by Money; a decimal count in the input is ignored
        let config: ConfigState = serde_json::from_value(serde_json::json!({
            "currencySymbol": "Rs.",
            "currencyDecimals": 0,
            "adminStoreId": "1",
            "rngSeed": null,
            "output": "text",
        }))
        .unwrap();

        assert_eq!(config.format_currency(Money::from_cents(8999)), "Rs.89.99");
        assert_eq!(config.format_currency(Money::from_cents(1_234_567)), "Rs.12345.67");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("QUICKSHOP_CURRENCY_SYMBOL", "$"),
            ("QUICKSHOP_ADMIN_STORE_ID", "2"),
            ("QUICKSHOP_SEED", "42"),
            ("QUICKSHOP_OUTPUT", "JSON"),
        ]));

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.admin_store_id, "2");
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.format_currency(Money::from_cents(8999)), "$89.99");
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = ConfigState::from_lookup(lookup(&[
            ("QUICKSHOP_SEED", "not-a-number"),
            ("QUICKSHOP_OUTPUT", "xml"),
        ]));

        assert_eq!(config.rng_seed, None);
        assert_eq!(config.output, OutputFormat::Text);
    }
}
