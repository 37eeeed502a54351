//! Configuration file loading for plainmark
//!
//! Reads a `NormalizerConfig` from a JSON or TOML file, with graceful
//! fallback to defaults.

use crate::config::NormalizerConfig;
use crate::error::{Error, Result, ResultExt};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// File extension that selects the TOML parser. Everything else is JSON.
const TOML_EXTENSION: &str = "toml";

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load configuration from `path`, falling back to defaults on any error.
///
/// # Behavior
///
/// 1. If the file exists and is valid, load and sanitize it
/// 2. If the file doesn't exist or is empty, return default settings
/// 3. If the file is unreadable or invalid, log a warning and return defaults
pub fn load_config(path: impl AsRef<Path>) -> NormalizerConfig {
    load_config_from(path)
        .unwrap_or_warn_default(NormalizerConfig::default(), "Failed to load configuration")
}

/// Load configuration from `path`, reporting errors.
///
/// The format is chosen by extension: `.toml` is parsed as TOML, anything
/// else as JSON. A missing or empty file yields the default configuration.
///
/// # Errors
///
/// Returns `Error::ConfigLoad` if the file cannot be read and
/// `Error::ConfigParse` if its contents are invalid.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<NormalizerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(NormalizerConfig::default());
    }

    debug!("Loading config from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("Config file is empty, using defaults");
        return Ok(NormalizerConfig::default());
    }

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TOML_EXTENSION));

    let parsed: Result<NormalizerConfig> = if is_toml {
        NormalizerConfig::from_toml_sanitized(&contents).map_err(Error::from)
    } else {
        NormalizerConfig::from_json_sanitized(&contents).map_err(Error::from)
    };

    parsed.map_err(|e| {
        warn!("Config file at {} is invalid: {}", path.display(), e);
        e
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::RuleId;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, NormalizerConfig::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(load_config_from(&path).unwrap(), NormalizerConfig::default());
    }

    #[test]
    fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"disabled_rules":["tables"],"trim_output":false}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.disabled_rules, vec![RuleId::Tables]);
        assert!(!config.trim_output);
    }

    #[test]
    fn test_load_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plainmark.TOML");
        fs::write(&path, "disabled_rules = [\"escapes\"]\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.disabled_rules, vec![RuleId::Escapes]);
        assert!(config.trim_output);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_directory_is_load_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(dir.path());
        assert!(matches!(result, Err(Error::ConfigLoad { .. })));
    }

    #[test]
    fn test_load_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "disabled_rules = \"not a list\"").unwrap();

        assert_eq!(load_config(&path), NormalizerConfig::default());
    }
}
