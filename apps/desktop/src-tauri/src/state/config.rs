//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LAVA_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use lava_core::dates::parse_zone;
use lava_core::CoreResult;

/// Application configuration.
///
/// ## Fields
/// Most fields have sensible defaults for development.
/// Production deployments should configure these properly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed in the page header)
    pub store_name: String,

    /// Store address lines (for tickets)
    pub store_address: Vec<String>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// IANA time zone the store operates in.
    /// Day boundaries (ironing workspace, reports) are computed here.
    pub time_zone: String,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Lavandería Central"
    /// - Currency: EUR (€)
    /// - Zone: Europe/Madrid
    fn default() -> Self {
        ConfigState {
            store_name: "Lavandería Central".to_string(),
            store_address: vec!["Calle Mayor 12".to_string(), "Madrid".to_string()],
            currency_symbol: "€".to_string(),
            currency_decimals: 2,
            time_zone: "Europe/Madrid".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LAVA_STORE_NAME`: Override store name
    /// - `LAVA_TIME_ZONE`: Override store time zone (IANA name)
    /// - `LAVA_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("LAVA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(zone) = std::env::var("LAVA_TIME_ZONE") {
            config.time_zone = zone;
        }

        if let Ok(symbol) = std::env::var("LAVA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Resolves the configured time zone.
    ///
    /// Fails fast on an unknown zone name; validated once at startup so a
    /// typo in config doesn't surface as wrong business dates later.
    pub fn zone(&self) -> CoreResult<Tz> {
        parse_zone(&self.time_zone)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "12.34 €");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        let amount = if self.currency_decimals > 0 {
            format!(
                "{}.{:0width$}",
                whole.abs(),
                frac,
                width = self.currency_decimals as usize
            )
        } else {
            whole.abs().to_string()
        };

        format!(
            "{}{} {}",
            if cents < 0 { "-" } else { "" },
            amount,
            self.currency_symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "12.34 €");
        assert_eq!(config.format_currency(100), "1.00 €");
        assert_eq!(config.format_currency(1), "0.01 €");
        assert_eq!(config.format_currency(0), "0.00 €");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-1234), "-12.34 €");
    }

    #[test]
    fn test_default_zone_resolves() {
        let config = ConfigState::default();
        assert!(config.zone().is_ok());
    }

    #[test]
    fn test_bad_zone_fails_fast() {
        let config = ConfigState {
            time_zone: "Not/AZone".to_string(),
            ..ConfigState::default()
        };
        assert!(config.zone().is_err());
    }
}
