use serde::Deserialize;

use crate::domain::{
    chart::ChartStyle,
    errors::ConfigError,
    logging::LogLevel,
    market_data::{DEFAULT_API_BASE_URL, Selection},
};

/// Runtime settings, optionally passed as JSON to [`mount`](crate::mount).
/// Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub canvas_id: String,
    pub default_selection: Selection,
    pub chart_style: ChartStyle,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            canvas_id: "cryptoChart".to_string(),
            default_selection: Selection::default(),
            chart_style: ChartStyle::default(),
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    /// `from_json` for `Some`, defaults for `None` or blank input
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, ConfigError> {
        match json.map(str::trim) {
            Some(s) if !s.is_empty() => Self::from_json(s),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = AppConfig::from_json(r#"{"api_base_url":"http://localhost:3000","log_level":"debug"}"#).unwrap();
        assert_eq!(cfg.api_base_url, "http://localhost:3000");
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.canvas_id, "cryptoChart");
        assert_eq!(cfg.default_selection, Selection::default());
        assert_eq!(cfg.chart_style.tension, 0.1);
    }

    #[test]
    fn nested_selection_and_style() {
        let cfg = AppConfig::from_json(
            r#"{"default_selection":{"coin":"solana","days":"90"},"chart_style":{"border_color":"red"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.default_selection, Selection::new("solana", "usd", "90"));
        assert_eq!(cfg.chart_style.border_color, "red");
        assert_eq!(cfg.chart_style.aspect_ratio, 2.0);
    }

    #[test]
    fn blank_or_missing_json_is_default() {
        assert_eq!(AppConfig::from_optional_json(None).unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_optional_json(Some("  ")).unwrap(), AppConfig::default());
        assert!(matches!(
            AppConfig::from_optional_json(Some("{not json")),
            Err(ConfigError::InvalidJson(_))
        ));
    }
}
