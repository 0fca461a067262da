//! The Chunk type: a bounded span of document text with provenance metadata.

use serde::{Deserialize, Serialize};

use crate::element::SectionNode;

/// A candidate chunk: cleaned text plus provenance, the unit handed to
/// downstream embedding and retrieval.
///
/// ## Id Scheme
///
/// Ids are `"<doc_id>::c<index>"`, assigned in emission order starting at 0,
/// so the i-th chunk of a document carries the literal index `i` — dense,
/// ordered, unique within the document:
///
/// ```rust
/// use chaff::Chunk;
///
/// assert_eq!(Chunk::format_id("board.pdf", 0), "board.pdf::c0");
/// assert_eq!(Chunk::format_id("board.pdf", 7), "board.pdf::c7");
/// ```
///
/// A chunk is mutated only by the cleaning step (its `text` is rewritten in
/// place before acceptance) and is never merged or split after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// `"<doc_id>::c<index>"`.
    pub id: String,
    /// Source document identifier.
    pub doc_id: String,
    /// Chunk text; raw at creation, cleaned before acceptance.
    pub text: String,
    /// Provenance metadata.
    pub meta: ChunkMeta,
}

/// Provenance metadata attached to each chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMeta {
    /// Source document identifier.
    pub doc_id: String,
    /// Page numbers the chunk spans: ascending, deduplicated, unknown pages
    /// excluded.
    pub pages: Vec<u32>,
    /// Heading hierarchy of the most specific buffered element.
    pub section_path: Vec<SectionNode>,
    /// Element type for standalone table/code chunks; `None` for packed
    /// prose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
}

impl Chunk {
    /// Format the id for the `index`-th chunk of `doc_id`.
    #[must_use]
    pub fn format_id(doc_id: &str, index: usize) -> String {
        format!("{doc_id}::c{index}")
    }

    /// Title of the most specific hierarchy node, if any.
    #[must_use]
    pub fn section_title(&self) -> Option<&str> {
        self.meta.section_path.last().map(|n| n.title.as_str())
    }

    /// The length of this chunk's text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk's text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ id: {}, pages: {:?}, len: {} }}",
            self.id,
            self.meta.pages,
            self.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_format() {
        assert_eq!(Chunk::format_id("doc", 0), "doc::c0");
        assert_eq!(Chunk::format_id("a/b.pdf", 12), "a/b.pdf::c12");
    }

    #[test]
    fn section_title_is_last_node() {
        let chunk = Chunk {
            id: "d::c0".into(),
            doc_id: "d".into(),
            text: "body".into(),
            meta: ChunkMeta {
                doc_id: "d".into(),
                pages: vec![1, 2],
                section_path: vec![
                    SectionNode::new("Hardware", 1),
                    SectionNode::new("Pinout", 2),
                ],
                element_type: None,
            },
        };
        assert_eq!(chunk.section_title(), Some("Pinout"));
    }

    #[test]
    fn serializes_without_null_element_type() {
        let chunk = Chunk {
            id: "d::c0".into(),
            doc_id: "d".into(),
            text: "body".into(),
            meta: ChunkMeta {
                doc_id: "d".into(),
                pages: vec![],
                section_path: vec![],
                element_type: None,
            },
        };
        let json = serde_json::to_string(&chunk).unwrap();
        assert!(!json.contains("element_type"));
    }
}
