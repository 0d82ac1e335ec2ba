//! Presentation settings for rendered economy reports.
//!
//! Amounts are always shown with two fractional digits; only the wording
//! around them is configurable.
//!
//! ```toml
//! currency_symbol = "€"
//! settled_message = "You are all settled up!"
//! uppercase_names = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Shown instead of an empty debt list.
    #[serde(default = "default_settled_message")]
    pub settled_message: String,

    /// Upper-case creditor names in the "you owe" block.
    #[serde(default = "default_uppercase_names")]
    pub uppercase_names: bool,
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_settled_message() -> String {
    "You are all settled up!".to_string()
}

fn default_uppercase_names() -> bool {
    true
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            settled_message: default_settled_message(),
            uppercase_names: default_uppercase_names(),
        }
    }
}

impl EconomyConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(EconomyConfig::from_toml("").unwrap(), EconomyConfig::default());
    }

    #[test]
    fn overrides_single_fields() {
        let config = EconomyConfig::from_toml(r#"currency_symbol = "kr ""#).unwrap();
        assert_eq!(config.currency_symbol, "kr ");
        assert_eq!(config.settled_message, "You are all settled up!");
        assert!(config.uppercase_names);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(matches!(
            EconomyConfig::from_toml("uppercase_names = \"yes\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            EconomyConfig::from_file("/nonexistent/tripsplit.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
