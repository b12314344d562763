//! Document block AST
//!
//! This module defines the typed blocks of a converted document. Blocks
//! are the common intermediate format between markup conversion and
//! binary document packaging.

use crate::style::BlockStyle;

/// Inline formatting flags in effect for a span of text.
///
/// Flags accumulate while descending the markup tree: a span inherits
/// every flag of its ancestors and may add its own, but never clears
/// one. Nesting the same emphasis twice is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Formatting {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
}

impl Formatting {
    /// Check if no flag is set
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline || self.strike)
    }
}

/// A contiguous span of text sharing one formatting state.
///
/// Text is carried exactly as authored; whitespace is never trimmed or
/// collapsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub formatting: Formatting,
}

impl Run {
    /// Create a run with explicit formatting
    pub fn new(text: impl Into<String>, formatting: Formatting) -> Self {
        Self {
            text: text.into(),
            formatting,
        }
    }

    /// Create a run with no formatting
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Formatting::default())
    }

    /// Create an empty run, used by blocks that only carry spacing
    pub fn blank() -> Self {
        Self::plain("")
    }

    /// Check if this run holds no characters at all
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A document-level unit composed of runs plus block-level style.
///
/// Blocks are created once by a classifier or export driver and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBlock {
    /// Heading with level (1-3) and its text runs
    Heading {
        level: u8,
        runs: Vec<Run>,
        style: BlockStyle,
    },

    /// Body paragraph
    Paragraph { runs: Vec<Run>, style: BlockStyle },

    /// Block quotation
    Quote { runs: Vec<Run>, style: BlockStyle },

    /// One item of a list; `ordinal` is `None` for bulleted items and
    /// the 1-based source position for numbered items
    ListItem {
        ordinal: Option<u32>,
        runs: Vec<Run>,
        style: BlockStyle,
    },

    /// An explicit vertical break carrying only spacing
    LineBreak { style: BlockStyle },
}

impl DocumentBlock {
    /// The text runs of this block; empty for a line break
    pub fn runs(&self) -> &[Run] {
        match self {
            DocumentBlock::Heading { runs, .. }
            | DocumentBlock::Paragraph { runs, .. }
            | DocumentBlock::Quote { runs, .. }
            | DocumentBlock::ListItem { runs, .. } => runs,
            DocumentBlock::LineBreak { .. } => &[],
        }
    }

    /// The style descriptor of this block
    pub fn style(&self) -> &BlockStyle {
        match self {
            DocumentBlock::Heading { style, .. }
            | DocumentBlock::Paragraph { style, .. }
            | DocumentBlock::Quote { style, .. }
            | DocumentBlock::ListItem { style, .. }
            | DocumentBlock::LineBreak { style } => style,
        }
    }

    /// Concatenated text of all runs, formatting stripped
    pub fn plain_text(&self) -> String {
        self.runs().iter().map(|run| run.text.as_str()).collect()
    }
}
