//! Parsed document elements and the parser-facing contract.
//!
//! Elements are produced by an external document parser (PDF or HTML) and
//! consumed exactly once per packing pass. Parsers may emit a flat sequence
//! or a tree; [`flatten`] linearizes a tree in pre-order without recursion,
//! so a pathologically nested document cannot overflow the call stack.

use serde::{Deserialize, Serialize};

/// The category of a parsed element.
///
/// Unknown or missing categories default to [`ElementKind::Paragraph`]: a
/// malformed element degrades to prose handling instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Running prose.
    #[default]
    Paragraph,
    /// A section heading.
    Heading,
    /// A table; rendered markdown preferred over raw text.
    Table,
    /// A code block.
    Code,
    /// Anything else the parser could not classify.
    Other,
}

impl ElementKind {
    /// Lowercase name, as written into chunk metadata.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::Table => "table",
            Self::Code => "code",
            Self::Other => "other",
        }
    }

    /// Whether an element of this kind bypasses the prose buffer and is
    /// always emitted as its own chunk.
    #[must_use]
    pub const fn is_standalone(self) -> bool {
        matches!(self, Self::Table | Self::Code)
    }
}

/// One node of a heading hierarchy path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNode {
    /// Heading text as the parser saw it.
    pub title: String,
    /// Outline depth, 1 = top level.
    pub level: u32,
}

impl SectionNode {
    /// Create a section node.
    #[must_use]
    pub fn new(title: impl Into<String>, level: u32) -> Self {
        Self {
            title: title.into(),
            level,
        }
    }
}

/// One typed unit of parsed document content.
///
/// All fields except `kind` are optional; the packer treats missing text as
/// an empty string and missing pages as "unknown" (excluded from chunk page
/// sets).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Element category.
    pub kind: ElementKind,
    /// Raw text content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// 1-based page number, if the parser tracked it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Ancestor headings, outermost first. Empty when the parser does not
    /// track hierarchy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub section_path: Vec<SectionNode>,
    /// Markdown rendering of a table element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_markdown: Option<String>,
    /// Child elements for hierarchical parser output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// A paragraph element with the given text.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Paragraph,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A heading element with the given text.
    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Heading,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A table element with the given markdown rendering.
    #[must_use]
    pub fn table(markdown: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Table,
            table_markdown: Some(markdown.into()),
            ..Self::default()
        }
    }

    /// A code element with the given text.
    #[must_use]
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Code,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Attach a page number.
    #[must_use]
    pub fn on_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Attach a heading hierarchy path.
    #[must_use]
    pub fn in_section(mut self, path: Vec<SectionNode>) -> Self {
        self.section_path = path;
        self
    }
}

/// What the external document parser produced for one document.
///
/// The original "try the official hybrid chunker, fall back on any failure"
/// pattern is replaced by an explicit outcome: the parser reports success or
/// failure, and the *caller* decides what to do with a failure. No exception
/// suppression.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The parser produced an element sequence (possibly empty).
    Parsed(Vec<Element>),
    /// The parser failed; `reason` is its diagnostic.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Flatten an element tree into a pre-order sequence.
///
/// Iterative with an explicit stack: parsers occasionally emit very deep
/// nesting, and recursion depth must not depend on document shape.
///
/// ```rust
/// use chaff::{flatten, Element};
///
/// let mut root = Element::heading("Intro");
/// root.children.push(Element::paragraph("Body"));
///
/// let flat = flatten(std::slice::from_ref(&root));
/// assert_eq!(flat.len(), 2);
/// assert_eq!(flat[0].text.as_deref(), Some("Intro"));
/// assert_eq!(flat[1].text.as_deref(), Some("Body"));
/// ```
#[must_use]
pub fn flatten(roots: &[Element]) -> Vec<&Element> {
    let mut out = Vec::new();
    let mut stack: Vec<&Element> = roots.iter().rev().collect();

    while let Some(el) = stack.pop() {
        out.push(el);
        for child in el.children.iter().rev() {
            stack.push(child);
        }
    }

    out
}
