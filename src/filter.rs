//! Chunk acceptance: the two-tier boilerplate drop policy.
//!
//! Tier one drops by name: a heading on the blacklist condemns the chunk
//! outright. Tier two requires corroboration: link density alone never drops
//! a chunk unless its heading also signals a reference/link section. The
//! asymmetry trades recall for precision — boilerplate sections are dropped
//! confidently, content-mixed sections need two independent signals.

use crate::heading::{matches_blacklist, normalize_heading};
use crate::linknoise::{looks_like_link_table, url_ratio};

/// Heading keywords that mark a reference/link section.
const REFERENCE_KEYWORDS: [&str; 4] = ["reference", "referenz", "link", "documentation"];

/// Heuristic thresholds for link-noise detection.
///
/// The defaults are tuned constants carried over unchanged; they are
/// configuration, not derived values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseThresholds {
    /// URL matches per word above which a block counts as link-dominated.
    pub url_ratio: f64,
    /// Minimum lines containing both "link" and `=` for a link-table shape.
    pub link_rows: usize,
    /// Minimum lines with 2+ pipes for a tabular shape.
    pub pipe_rows: usize,
}

impl Default for NoiseThresholds {
    fn default() -> Self {
        Self {
            url_ratio: 0.04,
            link_rows: 2,
            pipe_rows: 6,
        }
    }
}

/// Decides whether a cleaned candidate chunk is boilerplate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptanceFilter {
    thresholds: NoiseThresholds,
}

impl AcceptanceFilter {
    /// Create a filter with the given thresholds.
    #[must_use]
    pub const fn new(thresholds: NoiseThresholds) -> Self {
        Self { thresholds }
    }

    /// The configured thresholds.
    #[must_use]
    pub const fn thresholds(&self) -> &NoiseThresholds {
        &self.thresholds
    }

    /// Whether a chunk should be dropped.
    ///
    /// `heading` is the most specific hierarchy title, when the parser
    /// tracked one; the first line of `text` serves as a fallback heading.
    /// Short-circuits on the first matching tier:
    ///
    /// 1. Either heading matches the blacklist.
    /// 2. The text is link-dominated *and* either normalized heading
    ///    contains a reference/link keyword.
    ///
    /// ```rust
    /// use chaff::AcceptanceFilter;
    ///
    /// let filter = AcceptanceFilter::default();
    /// let urls = "https://a.example\nhttps://b.example\nhttps://c.example";
    ///
    /// // Link-dominated, but the heading says it is substantive content.
    /// assert!(!filter.should_drop(Some("Pin Configuration"), urls));
    /// // Same text under a reference heading is noise.
    /// assert!(filter.should_drop(Some("Reference Links"), urls));
    /// ```
    #[must_use]
    pub fn should_drop(&self, heading: Option<&str>, text: &str) -> bool {
        let first = first_line(text);

        if heading.is_some_and(matches_blacklist) || matches_blacklist(first) {
            return true;
        }

        if url_ratio(text) > self.thresholds.url_ratio
            || looks_like_link_table(text, self.thresholds.link_rows, self.thresholds.pipe_rows)
        {
            let from_heading = heading.map(normalize_heading).unwrap_or_default();
            let from_first = normalize_heading(first);
            return REFERENCE_KEYWORDS
                .iter()
                .any(|k| from_heading.contains(k) || from_first.contains(k));
        }

        false
    }
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or("").trim()
}
