//! # Editor Configuration
//!
//! Field size, straight-line template layout and the default names used when
//! the user leaves a name blank.
//!
//! ## Usage
//! ```rust
//! use pb_core::config::EditorConfig;
//!
//! let config = EditorConfig::default();
//! assert_eq!(config.field.width, 800.0);
//! ```
//!
//! A config file (JSON or YAML) can be pointed to with `PB_CONFIG_PATH`.
//! Missing sections fall back to their defaults.

use crate::error::{PlaybookError, Result};
use crate::geometry::FieldDimensions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "PB_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    #[serde(default)]
    pub field: FieldDimensions,
    #[serde(default)]
    pub template: TemplateLayout,
    #[serde(default)]
    pub defaults: SessionDefaults,
}

/// Straight-line template parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateLayout {
    /// Distance below the field's vertical centre (기본: 80)
    pub baseline_offset: f32,
    /// Horizontal gap between neighbours (기본: 60)
    pub spacing: f32,
    /// Role given to generated players
    pub default_role: String,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self { baseline_offset: 80.0, spacing: 60.0, default_role: "Player".to_string() }
    }
}

/// Names used when the editor starts and when a saved name is blank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDefaults {
    pub offense_play_name: String,
    pub defense_play_name: String,
    pub playbook_title: String,
    /// Prefix for "<prefix> <n>" when an offensive play is saved without a name
    pub offense_fallback_prefix: String,
    pub defense_fallback_prefix: String,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            offense_play_name: "Spread Concept".to_string(),
            defense_play_name: "Base Coverage".to_string(),
            playbook_title: "Custom Playbook".to_string(),
            offense_fallback_prefix: "Offense Play".to_string(),
            defense_fallback_prefix: "Defense Play".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: EditorConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load by extension: `.yaml`/`.yml` as YAML, anything else as JSON
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Config from `PB_CONFIG_PATH`, or defaults when the variable is unset or blank
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        log::debug!("loading editor config from {CONFIG_PATH_ENV}='{path}'");
        Self::from_path(Path::new(path))
    }

    pub fn validate(&self) -> Result<()> {
        let field = &self.field;
        if !(field.width.is_finite() && field.height.is_finite())
            || !(field.width > 0.0 && field.height > 0.0)
        {
            return Err(PlaybookError::InvalidConfig(format!(
                "field size must be positive, got {}x{}",
                field.width, field.height
            )));
        }
        if !field.padding.is_finite()
            || field.padding < 0.0
            || field.padding * 2.0 >= field.width
            || field.padding * 2.0 >= field.height
        {
            return Err(PlaybookError::InvalidConfig(format!(
                "padding {} leaves no playable area on a {}x{} field",
                field.padding, field.width, field.height
            )));
        }
        if !self.template.spacing.is_finite() || self.template.spacing <= 0.0 {
            return Err(PlaybookError::InvalidConfig(format!(
                "template spacing must be positive, got {}",
                self.template.spacing
            )));
        }
        if !self.template.baseline_offset.is_finite() {
            return Err(PlaybookError::InvalidConfig(format!(
                "template baseline offset must be finite, got {}",
                self.template.baseline_offset
            )));
        }
        Ok(())
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let cfg = EditorConfig::default();
        assert_eq!(cfg.field, FieldDimensions { width: 800.0, height: 500.0, padding: 40.0 });
        assert!((cfg.template.spacing - 60.0).abs() < f32::EPSILON);
        assert_eq!(cfg.defaults.playbook_title, "Custom Playbook");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = EditorConfig::from_json(r#"{"template": {"spacing": 45.0}}"#).unwrap();
        assert!((cfg.template.spacing - 45.0).abs() < f32::EPSILON);
        assert!((cfg.template.baseline_offset - 80.0).abs() < f32::EPSILON);
        assert_eq!(cfg.field, FieldDimensions::default());
    }

    #[test]
    fn test_yaml_config() {
        let yaml = "field:\n  width: 1000\n  height: 600\n  padding: 50\ndefaults:\n  playbook_title: Spring Install\n";
        let cfg = EditorConfig::from_yaml(yaml).unwrap();
        assert!((cfg.field.width - 1000.0).abs() < f32::EPSILON);
        assert_eq!(cfg.defaults.playbook_title, "Spring Install");
        assert_eq!(cfg.defaults.offense_fallback_prefix, "Offense Play");
    }

    #[test]
    fn test_rejects_padding_larger_than_field() {
        let mut cfg = EditorConfig::default();
        cfg.field.padding = 260.0;
        assert!(matches!(cfg.validate(), Err(PlaybookError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_spacing() {
        let err = EditorConfig::from_json(r#"{"template": {"spacing": 0.0}}"#).unwrap_err();
        assert!(matches!(err, PlaybookError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        for yaml in [
            "field:\n  padding: .nan\n",
            "field:\n  width: .inf\n",
            "template:\n  spacing: .nan\n",
            "template:\n  baseline_offset: -.inf\n",
        ] {
            let err = EditorConfig::from_yaml(yaml).unwrap_err();
            assert!(matches!(err, PlaybookError::InvalidConfig(_)), "{yaml}");
        }
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.yml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "template:\n  default_role: Athlete").unwrap();

        let cfg = EditorConfig::from_path(&path).unwrap();
        assert_eq!(cfg.template.default_role, "Athlete");
    }

    #[test]
    fn test_config_serialization() {
        let cfg = EditorConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed = EditorConfig::from_json(&json).unwrap();
        assert_eq!(parsed, cfg);
    }
}
