//! Link-density heuristics.
//!
//! Link directories — "useful links" appendices, navigation dumps scraped
//! from HTML — look like prose to a packer but are worthless to retrieval.
//! Two cheap shape tests flag them: the ratio of URL-like tokens to words,
//! and repeated `key=value` / multi-pipe lines that betray a tabular link
//! list. Neither is conclusive on its own; the acceptance filter requires a
//! corroborating heading before dropping anything.

use once_cell::sync::Lazy;
use regex::Regex;

/// URL-like tokens: scheme prefixes or a bare `www.`.
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://|www\.").unwrap());

/// Ratio of URL-like matches to whitespace-separated words, in `[0, 1]`
/// for ordinary text. Empty text yields `0.0`; the denominator is at
/// least 1.
///
/// ```rust
/// use chaff::url_ratio;
///
/// assert_eq!(url_ratio(""), 0.0);
/// assert!(url_ratio("see https://example.com for details") < 0.5);
/// assert!(url_ratio("https://a.io https://b.io https://c.io") >= 1.0);
/// ```
#[must_use]
pub fn url_ratio(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let urls = URL_RE.find_iter(text).count();
    let words = text.split_whitespace().count().max(1);
    urls as f64 / words as f64
}

/// Whether a block has the shape of a tabular link dump.
///
/// True if at least `min_link_rows` lines contain both "link"
/// (case-insensitive) and `=`, or at least `min_pipe_rows` lines contain two
/// or more `|` characters. The pipe threshold separates incidental pipes
/// from genuine link tables.
#[must_use]
pub fn looks_like_link_table(text: &str, min_link_rows: usize, min_pipe_rows: usize) -> bool {
    let mut link_rows = 0usize;
    let mut pipe_rows = 0usize;

    for line in text.lines() {
        if line.contains('=') && line.to_lowercase().contains("link") {
            link_rows += 1;
        }
        if line.matches('|').count() >= 2 {
            pipe_rows += 1;
        }
    }

    link_rows >= min_link_rows || pipe_rows >= min_pipe_rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_ratio() {
        assert_eq!(url_ratio(""), 0.0);
    }

    #[test]
    fn counts_all_url_shapes() {
        let text = "http://a.example https://b.example www.c.example plain";
        // 3 URL matches over 4 words.
        assert!((url_ratio(text) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn case_insensitive_urls() {
        assert!(url_ratio("HTTPS://EXAMPLE.COM") > 0.0);
        assert!(url_ratio("WWW.example.com") > 0.0);
    }

    #[test]
    fn link_rows_trigger() {
        let text = "Download Link = https://a.example\nMirror link = https://b.example";
        assert!(looks_like_link_table(text, 2, 6));
    }

    #[test]
    fn one_link_row_is_not_enough() {
        let text = "Download Link = https://a.example\nordinary prose";
        assert!(!looks_like_link_table(text, 2, 6));
    }

    #[test]
    fn pipe_rows_trigger() {
        let row = "| name | url |";
        let six = [row; 6].join("\n");
        assert!(looks_like_link_table(&six, 2, 6));

        let five = [row; 5].join("\n");
        assert!(!looks_like_link_table(&five, 2, 6));
    }

    #[test]
    fn incidental_pipes_pass() {
        assert!(!looks_like_link_table("a | b\nc | d", 2, 6));
    }
}
