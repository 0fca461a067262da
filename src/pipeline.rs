//! Per-document orchestration: pack, clean, threshold, filter, record.
//!
//! The pipeline owns the full candidate-to-accepted path for one document at
//! a time:
//!
//! ```text
//! ParseOutcome ──> pack ──> clean each candidate ──> length/word thresholds
//!                                                        │
//!                                   AcceptanceFilter ◀───┘
//!                                         │
//!                                 ChunkRecord (JSONL line)
//! ```
//!
//! A failed parse is logged and skipped here — one malformed document never
//! aborts a batch — while tokenizer failures propagate, because budget
//! accounting depends on them.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use crate::element::ParseOutcome;
use crate::filter::{AcceptanceFilter, NoiseThresholds};
use crate::normalize::clean;
use crate::packer::TokenBudgetPacker;
use crate::{Result, Tokenizer};

/// Chunk type recorded for packed prose chunks.
const PROSE_CHUNK_TYPE: &str = "contextualized";

/// Pipeline configuration.
///
/// The acceptance thresholds are tuned constants carried over unchanged;
/// they are configuration, not derived values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Token budget for prose buffering.
    pub token_budget: usize,
    /// Minimum cleaned chunk length in characters.
    pub min_chars: usize,
    /// Minimum word count of the cleaned, contextualized text.
    pub min_words: usize,
    /// Link-noise thresholds for the acceptance filter.
    pub noise: NoiseThresholds,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            token_budget: 1000,
            min_chars: 30,
            min_words: 25,
            noise: NoiseThresholds::default(),
        }
    }
}

/// Caller-supplied enrichment attached to accepted records.
///
/// These fields come from the orchestration layer (directory layout,
/// catalog lookups); the pipeline only carries them through and renders the
/// context banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    /// Document category (e.g. product family).
    pub category: Option<String>,
    /// Product name.
    pub product: Option<String>,
    /// Hardware element identifier.
    pub element: Option<String>,
    /// Tutorial identifier.
    pub tutorial: Option<String>,
}

impl Enrichment {
    /// Render the context banner prepended to record text, or `None` when
    /// no enrichment is present.
    fn banner(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(product) = &self.product {
            parts.push(format!("[Product: {product}]"));
        }
        if let Some(category) = &self.category {
            parts.push(format!("[Category: {category}]"));
        }
        if let Some(element) = &self.element {
            parts.push(format!("[Element: {element}]"));
        }
        if let Some(tutorial) = &self.tutorial {
            parts.push(format!("[Tutorial: {tutorial}]"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// One accepted chunk, serializable as a JSONL line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// `"<doc_id>::c<index>"`.
    pub chunk_id: String,
    /// Token count of the contextualized text.
    pub chunk_size: usize,
    /// `"table"` / `"code"` for standalone chunks, `"contextualized"` for
    /// packed prose.
    pub chunk_type: String,
    /// Most specific section title, if the parser tracked hierarchy.
    pub section: Option<String>,
    /// Tokens per character of the contextualized text, rounded to 4
    /// decimal places.
    pub semantic_density: f64,
    /// Context banner (if any) plus cleaned chunk text.
    pub text: String,
    /// Raw chunk count for the source document, before filtering.
    pub total_chunks: usize,
    /// Enrichment: document category.
    pub category: Option<String>,
    /// Enrichment: product name.
    pub product: Option<String>,
    /// Enrichment: hardware element identifier.
    pub element: Option<String>,
    /// Enrichment: tutorial identifier.
    pub tutorial: Option<String>,
}

/// The chunk-assembly pipeline for one document at a time.
///
/// Stateless between documents: each [`Pipeline::process`] call owns its own
/// buffer and id counter, so independent workers can share one `Pipeline`
/// by reference across threads when `T: Sync`.
#[derive(Debug, Clone)]
pub struct Pipeline<T> {
    packer: TokenBudgetPacker,
    filter: AcceptanceFilter,
    config: PipelineConfig,
    tokenizer: T,
}

impl<T: Tokenizer> Pipeline<T> {
    /// Create a pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBudget`] if the configured token
    /// budget is zero.
    pub fn new(config: PipelineConfig, tokenizer: T) -> Result<Self> {
        Ok(Self {
            packer: TokenBudgetPacker::new(config.token_budget)?,
            filter: AcceptanceFilter::new(config.noise),
            config,
            tokenizer,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process one parsed document into accepted records.
    ///
    /// A [`ParseOutcome::Failed`] is logged and yields no records; the
    /// caller decides whether to retry with another parser or move on.
    ///
    /// # Errors
    ///
    /// Propagates tokenizer failures.
    pub fn process(
        &self,
        doc_id: &str,
        outcome: ParseOutcome,
        enrichment: &Enrichment,
    ) -> Result<Vec<ChunkRecord>> {
        let elements = match outcome {
            ParseOutcome::Parsed(elements) => elements,
            ParseOutcome::Failed { reason } => {
                warn!(doc_id, reason, "document parser failed, skipping");
                return Ok(Vec::new());
            }
        };

        let chunks = self.packer.pack(&elements, doc_id, &self.tokenizer)?;
        let total_chunks = chunks.len();
        let banner = enrichment.banner();

        let mut records = Vec::new();
        for mut chunk in chunks {
            // Standalone table/code chunks keep their text verbatim: the
            // line-level normalizer would strip the very rows that make a
            // table a table.
            if chunk.meta.element_type.is_none() {
                chunk.text = clean(&chunk.text);
            }
            if chunk.text.chars().count() < self.config.min_chars {
                continue;
            }

            let context = match &banner {
                Some(banner) => format!("{banner}\n\n{}", chunk.text),
                None => chunk.text.clone(),
            };
            if context.unicode_words().count() < self.config.min_words {
                continue;
            }

            let section = chunk.section_title().map(ToString::to_string);
            if self.filter.should_drop(section.as_deref(), &chunk.text) {
                debug!(chunk_id = %chunk.id, "dropped boilerplate chunk");
                continue;
            }

            let tokens = self.tokenizer.count_tokens(&context)?;
            records.push(ChunkRecord {
                chunk_id: chunk.id,
                chunk_size: tokens,
                chunk_type: chunk
                    .meta
                    .element_type
                    .unwrap_or_else(|| PROSE_CHUNK_TYPE.to_string()),
                section,
                semantic_density: semantic_density(tokens, context.chars().count()),
                text: context,
                total_chunks,
                category: enrichment.category.clone(),
                product: enrichment.product.clone(),
                element: enrichment.element.clone(),
                tutorial: enrichment.tutorial.clone(),
            });
        }

        Ok(records)
    }
}

/// Tokens per character, rounded to 4 decimal places.
fn semantic_density(tokens: usize, chars: usize) -> f64 {
    let raw = tokens as f64 / chars.max(1) as f64;
    (raw * 10_000.0).round() / 10_000.0
}

/// Write records as newline-delimited JSON, one record per line.
///
/// # Errors
///
/// Returns an error on serialization or write failure.
pub fn write_jsonl<W: Write>(mut writer: W, records: &[ChunkRecord]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
