//! Heading normalization and the boilerplate blacklist.
//!
//! Technical manuals ship the same non-substantive sections over and over:
//! tables of contents, revision histories, glossaries, legal notices. They
//! are easy to identify by name — once chapter numbering and decoration are
//! stripped — so the blacklist drops them confidently by title alone:
//!
//! ```text
//! "1.2  Revision History:"  ──normalize──>  "revision history"  ──> drop
//! "Kapitel 3: Inhaltsverzeichnis"  ──>  "inhaltsverzeichnis"    ──> drop
//! "1. Power Budget"          ──>  "power budget"                ──> keep
//! ```
//!
//! The lists are bilingual (English/German) and are immutable process-wide
//! statics, safe to share across concurrent document workers.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// `Section 3:`, `Chapter 2.`, `Kapitel 1)`, `Abschnitt 4 -` prefixes.
static CHAPTER_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(section|chapter|kapitel|abschnitt)\s*\d+\s*[:.)\-]*\s*").unwrap());

/// Numeric outline prefixes: `1`, `2.3`, `4.1.2:` and similar.
static OUTLINE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+(?:\.\d+)*\s*[:.)\-]*\s*").unwrap());

static WS_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalized headings dropped on exact match.
static BLACKLIST_EXACT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // English
        "contents",
        "table of contents",
        "toc",
        "index",
        "references",
        "reference documentation",
        "company information",
        "company info",
        "revision history",
        "document history",
        "legal notice",
        "trademarks",
        "acknowledgements",
        "glossary",
        "contacts",
        "contact",
        // German
        "inhaltsverzeichnis",
        "stichwortverzeichnis",
        "literaturverzeichnis",
        "änderungshistorie",
        "impressum",
        "glossar",
        "kontakt",
    ]
    .into_iter()
    .collect()
});

/// Substrings that condemn a normalized heading wherever they appear.
static BLACKLIST_SUBSTRING: [&str; 7] = [
    "reference documentation",
    "referenzdokumentation",
    "table of contents",
    "inhaltsverzeichnis",
    "revision history",
    "document history",
    "company information",
];

/// Normalize a heading for blacklist matching.
///
/// Lowercases, strips chapter/section word prefixes and numeric outline
/// prefixes, trims trailing decoration (space, colon, period, hyphen), and
/// collapses internal whitespace. Empty input normalizes to the empty string.
///
/// ```rust
/// use chaff::normalize_heading;
///
/// assert_eq!(normalize_heading("1.2  Revision History:"), "revision history");
/// assert_eq!(normalize_heading("Chapter 4 - Glossary"), "glossary");
/// assert_eq!(normalize_heading(""), "");
/// ```
#[must_use]
pub fn normalize_heading(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }

    let s = title.trim().to_lowercase();
    let s = CHAPTER_PREFIX_RE.replace(&s, "");
    let s = OUTLINE_PREFIX_RE.replace(&s, "");
    let s = s.trim_end_matches([' ', ':', '.', '-']);
    WS_RUN_RE.replace_all(s, " ").into_owned()
}

/// Whether a heading names a boilerplate section.
///
/// True if the normalized heading exactly equals a blacklisted section name
/// or contains a blacklisted substring.
///
/// ```rust
/// use chaff::matches_blacklist;
///
/// assert!(matches_blacklist("1. Table of Contents"));
/// assert!(!matches_blacklist("1. Power Budget"));
/// ```
#[must_use]
pub fn matches_blacklist(title: &str) -> bool {
    let norm = normalize_heading(title);
    if norm.is_empty() {
        return false;
    }
    BLACKLIST_EXACT.contains(norm.as_str()) || BLACKLIST_SUBSTRING.iter().any(|k| norm.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_outline_prefixes() {
        assert_eq!(normalize_heading("1. Introduction"), "introduction");
        assert_eq!(normalize_heading("2.3.1 Pin Mapping"), "pin mapping");
        assert_eq!(normalize_heading("4) Overview"), "overview");
    }

    #[test]
    fn strips_chapter_word_prefixes() {
        assert_eq!(normalize_heading("Section 2: References"), "references");
        assert_eq!(normalize_heading("Kapitel 3 - Impressum"), "impressum");
        assert_eq!(normalize_heading("Abschnitt 1. Glossar"), "glossar");
    }

    #[test]
    fn trims_decoration_and_whitespace() {
        assert_eq!(normalize_heading("  Glossary : "), "glossary");
        assert_eq!(normalize_heading("Revision   History."), "revision history");
    }

    #[test]
    fn blacklist_exactness() {
        assert!(matches_blacklist("1. Table of Contents"));
        assert!(!matches_blacklist("1. Power Budget"));
    }

    #[test]
    fn blacklist_exact_entries() {
        for title in ["Contents", "TOC", "Revision History", "Legal Notice", "Inhaltsverzeichnis"] {
            assert!(matches_blacklist(title), "expected drop for {title:?}");
        }
    }

    #[test]
    fn blacklist_substring_entries() {
        assert!(matches_blacklist("Appendix B: Reference Documentation for Modules"));
        assert!(matches_blacklist("Anhang: Referenzdokumentation Module"));
    }

    #[test]
    fn keeps_substantive_headings() {
        for title in ["Electrical Characteristics", "Boot Sequence", "2.1 Memory Map"] {
            assert!(!matches_blacklist(title), "unexpected drop for {title:?}");
        }
    }

    #[test]
    fn empty_and_numeric_only() {
        assert_eq!(normalize_heading(""), "");
        assert!(!matches_blacklist(""));
        assert!(!matches_blacklist("3.4.5"));
    }
}
