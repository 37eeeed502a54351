//! Normalizer settings
//!
//! Selects which rules of the standard pipeline run and whether the output
//! is trimmed, with serde support for JSON and TOML.

use crate::normalize::RuleId;
use serde::{Deserialize, Serialize};

/// Configuration for a normalization pipeline.
///
/// Rules always run in standard order; disabling one only removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Rules to skip
    pub disabled_rules: Vec<RuleId>,
    /// Trim leading and trailing whitespace from the result
    pub trim_output: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            trim_output: true,
        }
    }
}

impl NormalizerConfig {
    /// Whether `id` runs under this configuration.
    pub fn is_enabled(&self, id: RuleId) -> bool {
        !self.disabled_rules.contains(&id)
    }

    /// Remove duplicate entries and sort `disabled_rules` into pipeline order.
    pub fn sanitize(&mut self) {
        self.disabled_rules.sort();
        self.disabled_rules.dedup();
    }

    /// Parse JSON and sanitize the result.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.sanitize();
        Ok(config)
    }

    /// Parse TOML and sanitize the result.
    pub fn from_toml_sanitized(source: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(source)?;
        config.sanitize();
        Ok(config)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
