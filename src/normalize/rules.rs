//! Rewrite rules for Markdown normalization
//!
//! Each rule is a self-contained record: an identifier plus one or more
//! pattern passes. Rules are compiled once and shared for the lifetime of
//! the process.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Rule Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Identifies one rule of the standard pipeline.
///
/// The declaration order is the pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    HeadingMarkers,
    StrongEmphasis,
    WeakEmphasis,
    Links,
    Images,
    InlineCode,
    FencedCode,
    Blockquotes,
    Tables,
    HorizontalRules,
    Escapes,
    ListMarkers,
    BlankLines,
}

impl RuleId {
    /// Get a short human-readable label for the rule.
    pub fn label(&self) -> &'static str {
        match self {
            RuleId::HeadingMarkers => "Heading markers",
            RuleId::StrongEmphasis => "Strong emphasis",
            RuleId::WeakEmphasis => "Weak emphasis",
            RuleId::Links => "Links",
            RuleId::Images => "Images",
            RuleId::InlineCode => "Inline code",
            RuleId::FencedCode => "Fenced code blocks",
            RuleId::Blockquotes => "Blockquote markers",
            RuleId::Tables => "Tables",
            RuleId::HorizontalRules => "Horizontal rules",
            RuleId::Escapes => "Escaped characters",
            RuleId::ListMarkers => "List markers",
            RuleId::BlankLines => "Blank lines",
        }
    }

    /// Get all rule identifiers in pipeline order.
    pub fn all() -> &'static [RuleId] {
        &[
            RuleId::HeadingMarkers,
            RuleId::StrongEmphasis,
            RuleId::WeakEmphasis,
            RuleId::Links,
            RuleId::Images,
            RuleId::InlineCode,
            RuleId::FencedCode,
            RuleId::Blockquotes,
            RuleId::Tables,
            RuleId::HorizontalRules,
            RuleId::Escapes,
            RuleId::ListMarkers,
            RuleId::BlankLines,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rule Records
// ─────────────────────────────────────────────────────────────────────────────

/// How a matched span is rewritten.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// A `regex` replacement template (`${1}` expands to capture group 1).
    Template(&'static str),
    /// A function computing the replacement from the captures.
    Custom(fn(&Captures<'_>) -> String),
}

/// One pattern and its replacement, applied to every non-overlapping match.
pub struct Pass {
    pattern: Regex,
    replacement: Replacement,
}

impl Pass {
    fn new(pattern: &str, replacement: Replacement) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("built-in rule pattern must compile"),
            replacement,
        }
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Custom(rewrite) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| rewrite(caps)),
        }
    }

    /// The source of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// A named rewrite rule made of one or more passes run in order.
pub struct Rule {
    id: RuleId,
    passes: Vec<Pass>,
}

impl Rule {
    fn new(id: RuleId, passes: Vec<Pass>) -> Self {
        Self { id, passes }
    }

    /// The identifier of this rule.
    pub fn id(&self) -> RuleId {
        self.id
    }

    /// The passes of this rule, in application order.
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Apply every pass of this rule to `text`.
    ///
    /// Never fails: text that does not match is returned unchanged.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for pass in &self.passes {
            let rewritten = match pass.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            current = rewritten;
        }
        current
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let patterns: Vec<&str> = self.passes.iter().map(Pass::pattern).collect();
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("patterns", &patterns)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Custom Rewrites
// ─────────────────────────────────────────────────────────────────────────────

/// Keep escaped pairs (`\*`) and rule lines verbatim, otherwise keep the
/// emphasis interior.
///
/// The emphasis patterns list whole `***`/`___` lines and `\\.` as their
/// first alternatives so that neither can open or close a span.
fn unwrap_emphasis(caps: &Captures<'_>) -> String {
    match caps.get(1).or_else(|| caps.get(2)) {
        Some(inner) => inner.as_str().to_string(),
        None => caps[0].to_string(),
    }
}

/// `[label](target)` becomes `label (target)`; images are left for their own rule.
fn rewrite_link(caps: &Captures<'_>) -> String {
    if caps[0].starts_with('!') {
        return caps[0].to_string();
    }
    format!("{} ({})", &caps[1], &caps[2])
}

/// Replace each `|` and the spaces or tabs after it with one space, then trim
/// the row's edges so rows stay on their own lines without stray padding.
fn rewrite_table_row(caps: &Captures<'_>) -> String {
    let mut row = String::with_capacity(caps[0].len());
    let mut after_pipe = false;

    for ch in caps[0].chars() {
        match ch {
            '|' => {
                row.push(' ');
                after_pipe = true;
            }
            ' ' | '\t' if after_pipe => {}
            _ => {
                row.push(ch);
                after_pipe = false;
            }
        }
    }

    row.trim_matches(|c: char| c == ' ' || c == '\t').to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Standard Rule Set
// ─────────────────────────────────────────────────────────────────────────────

/// A line made only of one repeated `*` or `_`, left for the horizontal-rule rule.
const RULE_LINE: &str = r"(?m)^[ \t]*(?:\*{3,}|_{3,})[ \t]*$";

static STANDARD_RULES: OnceLock<Vec<Rule>> = OnceLock::new();

/// Get the compiled standard rules, in pipeline order.
pub fn standard_rules() -> &'static [Rule] {
    STANDARD_RULES.get_or_init(build_standard_rules)
}

/// Look up a single standard rule by identifier.
pub fn rule(id: RuleId) -> &'static Rule {
    // RuleId declaration order matches build order
    &standard_rules()[id as usize]
}

fn build_standard_rules() -> Vec<Rule> {
    use Replacement::{Custom, Template};

    vec![
        Rule::new(
            RuleId::HeadingMarkers,
            vec![Pass::new(r"(?m)^[ \t]*#+[ \t]+", Template(""))],
        ),
        Rule::new(
            RuleId::StrongEmphasis,
            vec![Pass::new(
                &format!(
                    r"{}|\\.|\*\*((?:\\.|[^\\\n])+?)\*\*|__((?:\\.|[^\\\n])+?)__",
                    RULE_LINE
                ),
                Custom(unwrap_emphasis),
            )],
        ),
        Rule::new(
            RuleId::WeakEmphasis,
            vec![Pass::new(
                &format!(
                    r"{}|\\.|\*((?:\\.|[^\\*\n])+)\*|_((?:\\.|[^\\_\n])+)_",
                    RULE_LINE
                ),
                Custom(unwrap_emphasis),
            )],
        ),
        Rule::new(
            RuleId::Links,
            vec![Pass::new(r"!?\[([^\]]*)\]\(([^)]*)\)", Custom(rewrite_link))],
        ),
        Rule::new(
            RuleId::Images,
            vec![Pass::new(r"!\[([^\]]*)\]\([^)]*\)", Template("${1}"))],
        ),
        Rule::new(
            RuleId::InlineCode,
            vec![Pass::new(r"`([^`\n]+)`", Template("${1}"))],
        ),
        Rule::new(
            RuleId::FencedCode,
            vec![Pass::new(
                r"(?ms)^[ \t]*```[^\n]*\n(.*?)^[ \t]*```[ \t]*(?:\n|\z)",
                Template("${1}"),
            )],
        ),
        Rule::new(
            RuleId::Blockquotes,
            vec![Pass::new(r"(?m)^[ \t]*> ?", Template(""))],
        ),
        Rule::new(
            RuleId::Tables,
            vec![
                Pass::new(r"(?m)^[^\n|]*\|[^\n]*$", Custom(rewrite_table_row)),
                Pass::new(r" {2,}", Template(" ")),
            ],
        ),
        Rule::new(
            RuleId::HorizontalRules,
            vec![Pass::new(
                r"(?m)^[ \t]*(?:-{3,}|\*{3,}|_{3,})[ \t]*$",
                Template(""),
            )],
        ),
        Rule::new(
            RuleId::Escapes,
            vec![Pass::new(r"(?s)\\(.)", Template("${1}"))],
        ),
        Rule::new(
            RuleId::ListMarkers,
            vec![
                Pass::new(r"(?m)^[ \t]*[-*+][ \t]+", Template("")),
                Pass::new(r"(?m)^[ \t]*[0-9]+\.[ \t]+", Template("")),
            ],
        ),
        Rule::new(
            RuleId::BlankLines,
            vec![Pass::new(r"\n{3,}", Template("\n\n"))],
        ),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
