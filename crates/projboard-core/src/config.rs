//! Board configuration.
//!
//! Loaded from an optional TOML file; every key has a default, so an absent
//! file yields the stock board.
//!
//! ```toml
//! notify = "always"
//! length_bounds = "enforced"
//!
//! [form]
//! title_min_length = 5
//! description_min_length = 5
//! people_min = 1
//! people_max = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{BoardError, BoardResult};
use crate::state::NotifyPolicy;
use crate::validation::LengthBounds;

/// Constraints applied by the project form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormRules {
    pub title_min_length: usize,
    pub description_min_length: usize,
    /// Exclusive lower bound on team size.
    pub people_min: f64,
    /// Exclusive upper bound on team size.
    pub people_max: f64,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title_min_length: 5,
            description_min_length: 5,
            people_min: 1.0,
            people_max: 5.0,
        }
    }
}

/// Top-level board configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub notify: NotifyPolicy,
    pub length_bounds: LengthBounds,
    pub form: FormRules,
}

impl BoardConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> BoardResult<Self> {
        let Some(path) = path else {
            debug!("No board config given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "Board config loaded");
        Ok(config)
    }

    /// Parse and check a TOML document.
    pub fn from_toml_str(content: &str) -> BoardResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> BoardResult<()> {
        let form = &self.form;
        if !form.people_min.is_finite() || !form.people_max.is_finite() {
            return Err(BoardError::config("people bounds must be finite numbers"));
        }
        if form.people_min >= form.people_max {
            return Err(BoardError::config(format!(
                "people_min ({}) must be below people_max ({})",
                form.people_min, form.people_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::load(None).unwrap();
        assert_eq!(config.notify, NotifyPolicy::Always);
        assert_eq!(config.length_bounds, LengthBounds::Enforced);
        assert_eq!(config.form.title_min_length, 5);
        assert_eq!(config.form.people_max, 5.0);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = BoardConfig::from_toml_str("notify = \"on_change\"\n").unwrap();
        assert_eq!(config.notify, NotifyPolicy::OnChange);
        assert_eq!(config.form, FormRules::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "length_bounds = \"legacy\"\n\n[form]\npeople_min = 0\npeople_max = 10"
        )
        .unwrap();

        let config = BoardConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.length_bounds, LengthBounds::Legacy);
        assert_eq!(config.form.people_min, 0.0);
        assert_eq!(config.form.people_max, 10.0);
        assert_eq!(config.form.description_min_length, 5);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = BoardConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, BoardError::TomlParse(_)));
    }

    #[test]
    fn test_inverted_people_bounds_rejected() {
        let err = BoardConfig::from_toml_str("[form]\npeople_min = 5\npeople_max = 1").unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }
}
