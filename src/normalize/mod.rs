//! Markdown normalization module
//!
//! Rewrites Markdown source into plain, readable text. The work is done by
//! a fixed, ordered list of regex rewrite rules rather than a parser: the
//! goal is readable output, not structural fidelity.
//!
//! # Rule order
//! 1. Heading markers
//! 2. Strong emphasis (`**x**`, `__x__`)
//! 3. Weak emphasis (`*x*`, `_x_`)
//! 4. Links (`[label](target)` becomes `label (target)`)
//! 5. Images (`![alt](target)` becomes `alt`)
//! 6. Inline code spans
//! 7. Fenced code blocks
//! 8. Blockquote markers
//! 9. Table pipes, then runs of spaces
//! 10. Horizontal rules
//! 11. Backslash escapes
//! 12. Unordered and ordered list markers
//! 13. Runs of three or more newlines
//!
//! The result is then trimmed. Reordering the rules changes the output.
//!
//! # Known limitations
//! Nested or overlapping emphasis (`*a **b* c**`) has no guaranteed output,
//! and underscores inside words (`snake_case_name`) are read as emphasis.

mod pipeline;
mod rules;

pub use pipeline::Pipeline;
pub use rules::{rule, standard_rules, Pass, Replacement, Rule, RuleId};

use std::sync::OnceLock;

static STANDARD_PIPELINE: OnceLock<Pipeline> = OnceLock::new();

/// Normalize Markdown `text` into plain text using the standard pipeline.
///
/// Total for every input: malformed or unbalanced syntax is left as-is.
///
/// # Example
/// ```
/// assert_eq!(plainmark::normalize("**bold** and *italic*"), "bold and italic");
/// assert_eq!(plainmark::normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    STANDARD_PIPELINE.get_or_init(Pipeline::standard).run(text)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
