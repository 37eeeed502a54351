//! plainmark - Markdown to plain text
//!
//! Strips Markdown syntax down to human-readable plain text with a fixed,
//! ordered pipeline of rewrite rules, and reports how much shorter the
//! result is than the source.
//!
//! # Example
//! ```
//! use plainmark::{compute_stats, normalize};
//!
//! let source = "# Title\n\nSome **bold** text.";
//! let plain = normalize(source);
//! assert_eq!(plain, "Title\n\nSome bold text.");
//!
//! let stats = compute_stats(source, &plain);
//! assert_eq!(stats.original_length, 28);
//! assert_eq!(stats.cleaned_length, 22);
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod stats;

pub use config::{load_config, load_config_from, NormalizerConfig};
pub use error::{Error, Result, ResultExt};
pub use normalize::{normalize, rule, standard_rules, Pipeline, Rule, RuleId};
pub use stats::{compute_stats, NormalizationStats};
