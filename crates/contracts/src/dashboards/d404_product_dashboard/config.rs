use super::error::DashboardError;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Stock at or below this (and above zero) is "low stock"
    pub low_stock_threshold: u32,
    /// Stock at or below this is highlighted amber in the inventory table
    pub stock_warning_level: u32,
    /// How long the refresh spinner stays on
    pub refresh_delay_ms: u32,
    pub currency_symbol: String,
    /// Chart and stat card colours, used in order and cycled
    pub palette: Vec<String>,
}

/// Neutral grey used when the palette has no entries
pub const FALLBACK_COLOR: &str = "#94a3b8";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r##"
low_stock_threshold = 5
stock_warning_level = 20
refresh_delay_ms = 1000
currency_symbol = "$"
palette = ["#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b"]
"##;

impl DashboardConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig =
            toml::from_str(contents).map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), DashboardError> {
        if self.palette.is_empty() {
            return Err(DashboardError::InvalidConfig(
                "palette must contain at least one colour".to_string(),
            ));
        }
        if self.stock_warning_level < self.low_stock_threshold {
            return Err(DashboardError::InvalidConfig(format!(
                "stock_warning_level ({}) is below low_stock_threshold ({})",
                self.stock_warning_level, self.low_stock_threshold
            )));
        }
        Ok(())
    }

    /// Colour for the n-th series, cycling through the palette
    pub fn color(&self, idx: usize) -> &str {
        if self.palette.is_empty() {
            return FALLBACK_COLOR;
        }
        &self.palette[idx % self.palette.len()]
    }
}

/// Load the dashboard configuration.
///
/// The app has no persisted settings, so this is the embedded default.
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    DashboardConfig::from_toml_str(DEFAULT_CONFIG).context("embedded dashboard config is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.low_stock_threshold, 5);
        assert_eq!(config.stock_warning_level, 20);
        assert_eq!(config.refresh_delay_ms, 1000);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.palette.len(), 4);
    }

    #[test]
    fn test_palette_cycles() {
        let config = load_config().unwrap();
        assert_eq!(config.color(0), "#3b82f6");
        assert_eq!(config.color(4), "#3b82f6");
        assert_eq!(config.color(7), "#f59e0b");
    }

    #[test]
    fn test_color_with_empty_palette_falls_back() {
        let config = DashboardConfig {
            palette: Vec::new(),
            ..load_config().unwrap()
        };
        assert_eq!(config.color(0), FALLBACK_COLOR);
        assert_eq!(config.color(3), FALLBACK_COLOR);
    }

    #[test]
    fn test_rejects_empty_palette() {
        let err = DashboardConfig::from_toml_str(
            r#"
low_stock_threshold = 5
stock_warning_level = 20
refresh_delay_ms = 1000
currency_symbol = "$"
palette = []
"#,
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_inverted_levels() {
        let err = DashboardConfig::from_toml_str(
            r##"
low_stock_threshold = 30
stock_warning_level = 20
refresh_delay_ms = 1000
currency_symbol = "$"
palette = ["#000"]
"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("stock_warning_level"));
    }

    #[test]
    fn test_rejects_missing_field() {
        let err = DashboardConfig::from_toml_str("low_stock_threshold = 5").unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }
}
