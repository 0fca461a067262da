//! # chaff
//!
//! Chunk assembly and boilerplate filtering for RAG ingestion pipelines.
//!
//! ## The Problem
//!
//! An external parser (Docling-style) turns PDFs and HTML into a sequence of
//! typed elements: paragraphs, headings, tables, code blocks. Those elements
//! are the wrong granularity for retrieval. Paragraphs are too small to embed
//! on their own, tables must never be glued to surrounding prose, and a large
//! share of technical documents is boilerplate you do not want in an index at
//! all: tables of contents, revision histories, link directories, OCR noise.
//!
//! This crate is the middle of that pipeline — it separates the wheat from
//! the chaff:
//!
//! ```text
//! Document Parser ──> elements ──> TokenBudgetPacker ──> chunk candidates
//!                                                             │
//!                                           clean() ──> AcceptanceFilter
//!                                                             │
//!                                          accepted ──> ChunkRecord (JSONL)
//! ```
//!
//! ## Packing Policy
//!
//! Contiguous prose elements accumulate in a buffer until adding the next one
//! would exceed a token budget; the buffer is then flushed as one chunk and
//! the overflowing element starts the next buffer. Elements are never split.
//! Tables and code blocks always flush the buffer and become standalone
//! chunks:
//!
//! ```text
//! budget = 15 tokens
//!
//! [para 10] [para 10] [table]
//!     │         │        │
//!     buffer=10 │        │
//!               10+10>15 ──> flush "c0" (para 1), buffer = para 2
//!                        └─> flush "c1" (para 2), emit "c2" (table alone)
//! ```
//!
//! ## Filtering Policy
//!
//! Two tiers, trading recall for precision:
//!
//! 1. A chunk whose heading (from hierarchy metadata or its first line)
//!    matches a bilingual blacklist of boilerplate section names is dropped
//!    by name alone.
//! 2. A link-dominated chunk is dropped only when its heading *also* signals
//!    a reference/link section. Legitimate prose that cites a few URLs
//!    survives.
//!
//! ## Quick Start
//!
//! ```rust
//! use chaff::{Element, Enrichment, HeuristicTokenizer, ParseOutcome, Pipeline, PipelineConfig};
//!
//! let elements = vec![
//!     Element::paragraph(
//!         "The module integrates a 2.4 GHz transceiver with an on-board \
//!          antenna and exposes the full GPIO bank of the host controller. \
//!          Power sequencing follows the reference design in the datasheet.",
//!     ),
//!     Element::table("| pin | function |\n|-----|----------|\n| 1 | GND |"),
//! ];
//!
//! let pipeline = Pipeline::new(PipelineConfig::default(), HeuristicTokenizer)?;
//! let records = pipeline.process(
//!     "datasheet.pdf",
//!     ParseOutcome::Parsed(elements),
//!     &Enrichment::default(),
//! )?;
//!
//! for record in &records {
//!     println!("{}: {} tokens", record.chunk_id, record.chunk_size);
//! }
//! # Ok::<(), chaff::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and per-document. Blacklists and cleaning
//! patterns are immutable process-wide statics, so independent workers can
//! chunk different documents in parallel with no coordination.

mod chunk;
mod element;
mod error;
mod filter;
mod heading;
mod linknoise;
mod normalize;
mod packer;
mod pipeline;
mod tokenizer;

pub use chunk::{Chunk, ChunkMeta};
pub use element::{flatten, Element, ElementKind, ParseOutcome, SectionNode};
pub use error::{Error, Result};
pub use filter::{AcceptanceFilter, NoiseThresholds};
pub use heading::{matches_blacklist, normalize_heading};
pub use linknoise::{looks_like_link_table, url_ratio};
pub use normalize::clean;
pub use packer::TokenBudgetPacker;
pub use pipeline::{write_jsonl, ChunkRecord, Enrichment, Pipeline, PipelineConfig};
pub use tokenizer::HeuristicTokenizer;

/// A token-counting collaborator.
///
/// Token counts drive the packer's budget accounting, so the contract is
/// strict: counting must be deterministic (the same text always yields the
/// same count), and failures propagate as [`Error::Tokenizer`] instead of
/// falling back to an estimate — a silent fallback would corrupt chunk
/// boundaries.
///
/// ```rust
/// use chaff::{HeuristicTokenizer, Tokenizer};
///
/// let tokenizer = HeuristicTokenizer;
/// let n = tokenizer.count_tokens("The quick brown fox.")?;
/// assert!(n > 0);
/// # Ok::<(), chaff::Error>(())
/// ```
pub trait Tokenizer: Send + Sync {
    /// Count tokens in `text`. Empty text counts as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying tokenizer fails; the caller must
    /// not substitute a guess.
    fn count_tokens(&self, text: &str) -> Result<usize>;
}
