//! Text normalization for OCR-flavored parser output.
//!
//! PDF extraction leaves characteristic damage in prose: words hyphenated
//! across line breaks, runs of blank lines, decorative rules, stray caption
//! lines, and garbage lines where OCR misfired. [`clean`] repairs what can be
//! repaired and drops what cannot:
//!
//! ```text
//! "Revenue  increased\n\n\nsignificantly last-\nquarter."
//!                     │
//!                     ▼
//! "Revenue increased\nsignificantly lastquarter."
//! ```
//!
//! Order matters: de-hyphenation runs before the noise-ratio line filter,
//! because joining a wrapped word changes the character composition of the
//! affected line.

use once_cell::sync::Lazy;
use regex::Regex;

/// `word-\nword` across a line break.
static HYPHEN_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\p{L})-\n(\p{L})").unwrap());

/// Two or more consecutive newlines.
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Runs of horizontal whitespace.
static HSPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());

/// `Table 3: ...` / `Figure 12 - ...` caption lines.
static CAPTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(table|figure)\s*\d+\s*[:.\-]\s").unwrap());

/// A markdown table row spanning the whole line.
static TABLE_ROW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|.*\|$").unwrap());

/// A markdown rule/separator line of 3+ dashes or equals signs.
static RULE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-=]{3,}$").unwrap());

/// Maximum tolerated ratio of non-alphabetic characters in a line.
const MAX_NOISE_RATIO: f64 = 0.6;

/// Normalize raw chunk text. Total: empty input yields an empty string.
///
/// Steps, in order, each over the whole text:
///
/// 1. Join soft-hyphenated line breaks (`last-\nquarter` → `lastquarter`).
/// 2. Strip carriage returns.
/// 3. Collapse blank-line runs into a single newline.
/// 4. Collapse horizontal whitespace runs into a single space.
/// 5. Drop blank lines and lines dominated by non-alphabetic characters
///    (OCR garbage, decorative rules, symbol soup).
/// 6. Drop table/figure caption lines.
/// 7. Drop markdown table rows.
/// 8. Drop markdown rule lines.
/// 9. Trim the result.
///
/// ```rust
/// use chaff::clean;
///
/// assert_eq!(
///     clean("Revenue  increased\n\n\nsignificantly last-\nquarter."),
///     "Revenue increased\nsignificantly lastquarter."
/// );
/// ```
#[must_use]
pub fn clean(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let t = HYPHEN_BREAK_RE.replace_all(raw, "${1}${2}");
    let t = t.replace('\r', "");
    let t = BLANK_RUN_RE.replace_all(&t, "\n");
    let t = HSPACE_RUN_RE.replace_all(&t, " ");

    let kept: Vec<&str> = t.split('\n').filter(|line| !drop_line(line)).collect();
    kept.join("\n").trim().to_string()
}

/// Line-level noise predicate for steps 5-8.
fn drop_line(line: &str) -> bool {
    let s = line.trim();
    if s.is_empty() {
        return true;
    }
    if noise_ratio(s) > MAX_NOISE_RATIO {
        return true;
    }
    if CAPTION_RE.is_match(s) {
        return true;
    }
    if TABLE_ROW_RE.is_match(s) {
        return true;
    }
    RULE_RE.is_match(s)
}

/// Ratio of non-alphabetic characters to total characters.
fn noise_ratio(s: &str) -> f64 {
    let total = s.chars().count();
    if total == 0 {
        return 1.0;
    }
    let non_alpha = s.chars().filter(|c| !c.is_alphabetic()).count();
    non_alpha as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_hyphenated_line_breaks() {
        assert_eq!(clean("experi-\nment"), "experiment");
        // Hyphen not sandwiched between letters stays.
        assert_eq!(clean("range 1-\n2 volts"), "range 1-\n2 volts");
    }

    #[test]
    fn collapses_blank_lines_and_spaces() {
        assert_eq!(clean("a b\n\n\nc  d"), "a b\nc d");
    }

    #[test]
    fn strips_carriage_returns() {
        assert_eq!(clean("line one\r\nline two"), "line one\nline two");
    }

    #[test]
    fn drops_noisy_ocr_lines() {
        let text = "Normal prose line here\n###$$%%&&**!!((@@))\nAnother normal line";
        assert_eq!(clean(text), "Normal prose line here\nAnother normal line");
    }

    #[test]
    fn drops_caption_lines() {
        let text = "Intro text here\nTable 3: Electrical characteristics\nFigure 12 - Block diagram\nOutro text";
        assert_eq!(clean(text), "Intro text here\nOutro text");
    }

    #[test]
    fn drops_markdown_table_rows_and_rules() {
        let text = "Before the table\n| pin | function |\n|-----|----------|\n===\nAfter the table";
        assert_eq!(clean(text), "Before the table\nAfter the table");
    }

    #[test]
    fn cleaning_scenario() {
        assert_eq!(
            clean("Revenue  increased\n\n\nsignificantly last-\nquarter."),
            "Revenue increased\nsignificantly lastquarter."
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t\n  "), "");
    }

    #[test]
    fn idempotent_on_typical_text() {
        let samples = [
            "Revenue  increased\n\n\nsignificantly last-\nquarter.",
            "Normal prose line here\n###$$%%\nAnother line",
            "Before\n| a | b |\nAfter",
            "a b\nc d\ne f",
        ];
        for raw in samples {
            let once = clean(raw);
            assert_eq!(clean(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn dehyphenation_runs_before_noise_filter() {
        // "ex-\nam" has letters on both sides; once joined, the line is
        // mostly alphabetic and survives. Filtering first would see two
        // short noisy fragments.
        assert_eq!(clean("ex-\nam"), "exam");
    }
}
