//! Length statistics for normalized text
//!
//! Compares a Markdown source with its normalized form so the caller can
//! show how much syntax was stripped.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// NormalizationStats
// ─────────────────────────────────────────────────────────────────────────────

/// Length reduction between an original text and its normalized form.
///
/// Lengths count Unicode scalar values (`char`s), not bytes.
///
/// `reduction_percent` is rounded to one decimal place, half away from zero
/// (`f64::round`). It is `0.0` when the original is empty and negative when
/// the cleaned text is longer, as happens when links are expanded.
///
/// # Example
///
/// ```
/// use plainmark::NormalizationStats;
///
/// let stats = NormalizationStats::from_texts("**bold**", "bold");
/// assert_eq!(stats.original_length, 8);
/// assert_eq!(stats.cleaned_length, 4);
/// assert_eq!(stats.reduction_percent, 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationStats {
    /// Number of characters in the original text
    pub original_length: usize,
    /// Number of characters in the normalized text
    pub cleaned_length: usize,
    /// Percentage of characters removed, one decimal place
    pub reduction_percent: f64,
}

impl NormalizationStats {
    /// Calculate statistics for an `original` text and its `cleaned` form.
    pub fn from_texts(original: &str, cleaned: &str) -> Self {
        let original_length = original.chars().count();
        let cleaned_length = cleaned.chars().count();

        Self {
            original_length,
            cleaned_length,
            reduction_percent: reduction_percent(original_length, cleaned_length),
        }
    }

    /// Signed number of characters removed (negative if the text grew).
    pub fn chars_removed(&self) -> i64 {
        self.original_length as i64 - self.cleaned_length as i64
    }

    /// Format the statistics for a status line.
    ///
    /// Returns a compact string like "120 → 90 chars (25.0% shorter)"
    pub fn format_compact(&self) -> String {
        let direction = if self.reduction_percent < 0.0 {
            "longer"
        } else {
            "shorter"
        };
        format!(
            "{} → {} chars ({:.1}% {})",
            self.original_length,
            self.cleaned_length,
            self.reduction_percent.abs(),
            direction
        )
    }
}

/// Compute length statistics for an `original` text and its `cleaned` form.
pub fn compute_stats(original: &str, cleaned: &str) -> NormalizationStats {
    NormalizationStats::from_texts(original, cleaned)
}

fn reduction_percent(original_length: usize, cleaned_length: usize) -> f64 {
    if original_length == 0 {
        return 0.0;
    }
    let removed = original_length as f64 - cleaned_length as f64;
    let percent = removed / original_length as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
