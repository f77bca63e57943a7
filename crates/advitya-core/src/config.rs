//! Landing page configuration.
//!
//! Every field has a default matching the shipped page, so an empty JSON
//! object (or no config file at all) gives the stock behaviour.
//!
//! ```json
//! {
//!   "overlay": { "display_duration_ms": 3000 },
//!   "counter": { "target_value": 2026, "format": { "pad_start": true } },
//!   "grid": { "columns": 2 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::GridLayout;
use crate::error::{ConfigError, ConfigResult};
use crate::overlay::OverlayConfig;
use crate::reveal::CounterConfig;

/// Choice grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Snake path width
    pub columns: u32,
    /// Opacity applied to the grid content (0.0..=1.0)
    pub content_opacity: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            content_opacity: 1.0,
        }
    }
}

impl GridConfig {
    pub fn layout(&self) -> GridLayout {
        GridLayout::snake(self.columns)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.columns == 0 {
            return Err(ConfigError::Invalid(
                "grid columns must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.content_opacity) {
            return Err(ConfigError::Invalid(
                "grid content_opacity must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything the landing page components read at startup
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub overlay: OverlayConfig,
    pub counter: CounterConfig,
    pub grid: GridConfig,
    /// Start with the splash overlay already dismissed
    pub skip_intro: bool,
}

impl LandingConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "Loaded landing config");
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.overlay.validate()?;
        self.counter.validate()?;
        self.grid.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = LandingConfig::from_json("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
        assert_eq!(config.overlay.display_duration_ms, 5000);
        assert_eq!(config.counter.target_value, 2026.0);
        assert_eq!(config.grid.columns, 2);
        assert!(!config.skip_intro);
    }

    #[test]
    fn test_partial_override() {
        let config = LandingConfig::from_json(
            r#"{ "overlay": { "display_duration_ms": 3000 }, "counter": { "target_value": 1999 } }"#,
        )
        .unwrap();
        assert_eq!(config.overlay.display_duration_ms, 3000);
        assert_eq!(config.overlay.exit_animation_ms, 800);
        assert_eq!(config.counter.target_value, 1999.0);
        assert_eq!(config.counter.steps, 60);
        assert!(config.counter.format.pad_start);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = LandingConfig::from_json(r#"{ "grid": { "columns": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = LandingConfig::from_json(r#"{ "counter": { "steps": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err =
            LandingConfig::from_json(r#"{ "grid": { "content_opacity": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = LandingConfig::from_json("{ overlay: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "skip_intro": true, "grid": {{ "columns": 3 }} }}"#).unwrap();

        let config = LandingConfig::load(file.path()).unwrap();
        assert!(config.skip_intro);
        assert_eq!(config.grid.layout().columns(), 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LandingConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
