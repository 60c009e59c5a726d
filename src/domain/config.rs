//! Config - Tooltip Behaviour Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{HIDE_DELAY_MS, MAX_DELAY_MS, POPOVER_HIDE_DELAY_MS, SHOW_DELAY_MS};
use crate::error::{Error, Result};

/// Hover-intent configuration for a tooltip button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Pointer activity over the tooltip keeps it open
    pub interactive: bool,
    /// Dwell on the trigger before showing
    pub show_delay_ms: u64,
    /// Grace period after leaving the trigger
    pub hide_delay_ms: u64,
    /// Delay after leaving an interactive tooltip
    pub popover_hide_delay_ms: u64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            interactive: false,
            show_delay_ms: SHOW_DELAY_MS,
            hide_delay_ms: HIDE_DELAY_MS,
            popover_hide_delay_ms: POPOVER_HIDE_DELAY_MS,
        }
    }
}

impl HoverConfig {
    /// Default delays with the interactive flag set
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            ..Default::default()
        }
    }

    /// Reject delays no pointer user would sit through
    pub fn validate(&self) -> Result<()> {
        let delays = [
            ("show_delay_ms", self.show_delay_ms),
            ("hide_delay_ms", self.hide_delay_ms),
            ("popover_hide_delay_ms", self.popover_hide_delay_ms),
        ];
        for (name, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(Error::Invalid {
                    message: format!("{name} = {value} exceeds {MAX_DELAY_MS} ms"),
                });
            }
        }
        Ok(())
    }
}

/// Application configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tooltip behaviour
    pub tooltip: HoverConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.tooltip.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = HoverConfig::default();
        assert!(!config.interactive);
        assert_eq!(config.show_delay_ms, 500);
        assert_eq!(config.hide_delay_ms, 300);
        assert_eq!(config.popover_hide_delay_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("[tooltip]\ninteractive = true\n").expect("parse");
        assert_eq!(config.tooltip, HoverConfig::interactive());
    }

    #[test]
    fn test_validate_rejects_huge_delay() {
        let config = HoverConfig {
            hide_delay_ms: MAX_DELAY_MS + 1,
            ..Default::default()
        };
        let err = config.validate().expect_err("should reject");
        assert!(err.to_string().contains("hide_delay_ms"));
    }
}
