//! The token-budget packer: element sequence in, chunk candidates out.
//!
//! ## The State Machine
//!
//! One mutable buffer per document, processed strictly in input order:
//!
//! ```text
//! element is table/code?
//!   yes ──> flush buffer, emit element as its own chunk (never merged,
//!           never split, never counted against the budget)
//!   no  ──> would buffer_tokens + element_tokens exceed the budget,
//!           and is the buffer non-empty?
//!             yes ──> flush buffer first
//!           append element text + metadata to buffer
//! end of input ──> flush whatever remains
//! ```
//!
//! The budget bounds *accumulation*, not element size: a single prose
//! element larger than the budget still becomes one chunk, because elements
//! are never split. The overflow tie-break places the triggering element in
//! the next buffer, so the tokens accumulated before it never exceed the
//! budget.
//!
//! ## Flush Semantics
//!
//! Buffered texts join with `\n` and trim; pages union (sorted,
//! deduplicated); the section path of the *last* buffered element wins —
//! the most specific heading context. A buffer whose joined text trims to
//! nothing emits no chunk, keeping ids dense.

use crate::chunk::{Chunk, ChunkMeta};
use crate::element::{Element, SectionNode};
use crate::{Error, Result, Tokenizer};

/// Packs contiguous prose elements under a token budget; table and code
/// elements always stand alone.
///
/// ```rust
/// use chaff::{Element, HeuristicTokenizer, TokenBudgetPacker};
///
/// let packer = TokenBudgetPacker::new(1000)?;
/// let elements = vec![
///     Element::paragraph("First paragraph."),
///     Element::paragraph("Second paragraph."),
/// ];
/// let chunks = packer.pack(&elements, "doc.pdf", &HeuristicTokenizer)?;
///
/// // Both fit one buffer.
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].id, "doc.pdf::c0");
/// # Ok::<(), chaff::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenBudgetPacker {
    budget: usize,
}

impl TokenBudgetPacker {
    /// Create a packer with the given token budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBudget`] if `budget` is zero.
    pub fn new(budget: usize) -> Result<Self> {
        if budget == 0 {
            return Err(Error::InvalidBudget(budget));
        }
        Ok(Self { budget })
    }

    /// The configured token budget.
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Pack one document's elements, in order, into chunk candidates.
    ///
    /// # Errors
    ///
    /// Propagates tokenizer failures. Budget accounting depends on exact
    /// counts, so there is no fallback.
    pub fn pack<'a, I, T>(&self, elements: I, doc_id: &str, tokenizer: &T) -> Result<Vec<Chunk>>
    where
        I: IntoIterator<Item = &'a Element>,
        T: Tokenizer + ?Sized,
    {
        let mut chunks = Vec::new();
        let mut buffer = Buffer::default();

        for el in elements {
            if el.kind.is_standalone() {
                buffer.flush_into(doc_id, &mut chunks);
                emit_standalone(el, doc_id, &mut chunks);
            } else {
                // Missing text degrades to an empty zero-token slot.
                let text = el.text.as_deref().unwrap_or("");
                let tokens = tokenizer.count_tokens(text)?;
                if !buffer.is_empty() && buffer.tokens + tokens > self.budget {
                    buffer.flush_into(doc_id, &mut chunks);
                }
                buffer.push(text, el, tokens);
            }
        }

        buffer.flush_into(doc_id, &mut chunks);
        Ok(chunks)
    }
}

/// Emit a table/code element as its own chunk, markdown preferred over raw
/// text. Empty content emits nothing.
fn emit_standalone(el: &Element, doc_id: &str, chunks: &mut Vec<Chunk>) {
    let content = el
        .table_markdown
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .or(el.text.as_deref())
        .unwrap_or("");
    if content.trim().is_empty() {
        return;
    }

    chunks.push(Chunk {
        id: Chunk::format_id(doc_id, chunks.len()),
        doc_id: doc_id.to_string(),
        text: content.to_string(),
        meta: ChunkMeta {
            doc_id: doc_id.to_string(),
            pages: el.page.into_iter().collect(),
            section_path: el.section_path.clone(),
            element_type: Some(el.kind.as_str().to_string()),
        },
    });
}

/// In-flight accumulation state for one document's prose run.
#[derive(Debug, Default)]
struct Buffer {
    texts: Vec<String>,
    pages: Vec<u32>,
    /// Section path of the most recently buffered element.
    section_path: Vec<SectionNode>,
    tokens: usize,
    slots: usize,
}

impl Buffer {
    fn is_empty(&self) -> bool {
        self.slots == 0
    }

    fn push(&mut self, text: &str, el: &Element, tokens: usize) {
        self.texts.push(text.to_string());
        if let Some(page) = el.page {
            self.pages.push(page);
        }
        self.section_path.clone_from(&el.section_path);
        self.tokens += tokens;
        self.slots += 1;
    }

    /// Emit the buffered run as a chunk (if its text is non-empty) and
    /// reset.
    fn flush_into(&mut self, doc_id: &str, chunks: &mut Vec<Chunk>) {
        if self.slots == 0 {
            return;
        }

        let text = self.texts.join("\n").trim().to_string();
        if !text.is_empty() {
            let mut pages = std::mem::take(&mut self.pages);
            pages.sort_unstable();
            pages.dedup();

            chunks.push(Chunk {
                id: Chunk::format_id(doc_id, chunks.len()),
                doc_id: doc_id.to_string(),
                text,
                meta: ChunkMeta {
                    doc_id: doc_id.to_string(),
                    pages,
                    section_path: std::mem::take(&mut self.section_path),
                    element_type: None,
                },
            });
        }

        self.texts.clear();
        self.pages.clear();
        self.section_path.clear();
        self.tokens = 0;
        self.slots = 0;
    }
}
