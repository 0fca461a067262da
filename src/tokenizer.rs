//! Default token estimation.
//!
//! Real pipelines plug in a model tokenizer through the [`Tokenizer`] trait.
//! For budget accounting without a vocabulary, a chars-per-token estimate is
//! close enough in practice: English runs about 4 characters per token, CJK
//! scripts about 2 characters per token.

use crate::{Result, Tokenizer};

/// Character-composition token estimator.
///
/// Deterministic and infallible. ASCII text takes a fast path (`len / 4`);
/// mixed-script text is counted per character with CJK weighted at roughly
/// two characters per token. Non-empty text never estimates to zero.
///
/// ```rust
/// use chaff::{HeuristicTokenizer, Tokenizer};
///
/// let t = HeuristicTokenizer;
/// assert_eq!(t.count_tokens("")?, 0);
/// assert_eq!(t.count_tokens("abcdefgh")?, 2);
/// # Ok::<(), chaff::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTokenizer;

impl Tokenizer for HeuristicTokenizer {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        if text.is_empty() {
            return Ok(0);
        }

        // Fast path: pure ASCII, ~4 chars per token.
        if text.is_ascii() {
            return Ok((text.len() / 4).max(1));
        }

        let mut chars = 0usize;
        let mut cjk = 0usize;
        for c in text.chars() {
            chars += 1;
            if is_cjk(c) {
                cjk += 1;
            }
        }

        let non_cjk = chars - cjk;
        Ok((cjk / 2 + non_cjk / 4).max(1))
    }
}

#[inline]
fn is_cjk(c: char) -> bool {
    let code = c as u32;
    (0x4E00..=0x9FFF).contains(&code) // CJK Unified Ideographs
        || (0x3040..=0x309F).contains(&code) // Hiragana
        || (0x30A0..=0x30FF).contains(&code) // Katakana
        || (0xAC00..=0xD7AF).contains(&code) // Hangul
}
