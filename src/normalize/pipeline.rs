//! Ordered rule pipeline
//!
//! A `Pipeline` runs a subset of the standard rules, always in standard
//! order, then optionally trims the result.

use super::rules::{standard_rules, Rule, RuleId};
use crate::config::NormalizerConfig;
use log::{debug, trace};

/// An ordered sequence of rewrite rules.
#[derive(Debug, Clone)]
pub struct Pipeline {
    rules: Vec<&'static Rule>,
    trim_output: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl Pipeline {
    /// The full standard pipeline: every rule, output trimmed.
    pub fn standard() -> Self {
        Self {
            rules: standard_rules().iter().collect(),
            trim_output: true,
        }
    }

    /// Build a pipeline honoring the enabled rules and trim flag of `config`.
    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self {
            rules: standard_rules()
                .iter()
                .filter(|rule| config.is_enabled(rule.id()))
                .collect(),
            trim_output: config.trim_output,
        }
    }

    /// Identifiers of the rules this pipeline runs, in order.
    pub fn rule_ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.rules.iter().map(|rule| rule.id())
    }

    /// Whether the final whitespace trim is applied.
    pub fn trims_output(&self) -> bool {
        self.trim_output
    }

    /// Run every rule over `text` in order.
    pub fn run(&self, text: &str) -> String {
        let mut current = text.to_string();

        for rule in &self.rules {
            let rewritten = rule.apply(&current);
            if rewritten != current {
                trace!(
                    "{}: {} -> {} bytes",
                    rule.id().label(),
                    current.len(),
                    rewritten.len()
                );
                current = rewritten;
            }
        }

        if self.trim_output {
            let trimmed = current.trim();
            if trimmed.len() != current.len() {
                current = trimmed.to_string();
            }
        }

        debug!(
            "Normalized {} bytes to {} bytes with {} rules",
            text.len(),
            current.len(),
            self.rules.len()
        );
        current
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
