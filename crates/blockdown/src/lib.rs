//! # blockdown
//!
//! Convert rich-text markup trees to word-processor document blocks.
//!
//! The converter walks a formatted text tree and produces an ordered
//! sequence of typed blocks (headings, paragraphs, quotes, list items)
//! composed of formatted text runs, ready for serialization by an
//! external document packager.
//!
//! ## Design
//!
//! The engine consumes an owned [`MarkupNode`] tree rather than an HTML
//! string. This design allows:
//!
//! - **Parser agnostic**: any parser (or an editor's own serializer)
//!   can produce the tree structure
//! - **Smaller binaries**: no HTML parser bundled unless the `html`
//!   feature is enabled
//! - **Deterministic output**: conversion is pure and lossless for the
//!   supported tag vocabulary
//!
//! ## Example (tree-based)
//!
//! ```rust
//! use blockdown::{BlockdownService, MarkupNode};
//!
//! let service = BlockdownService::new();
//!
//! // Build a simple markup tree
//! let mut p = MarkupNode::element("p");
//! p.add_child(MarkupNode::text("Hello World"));
//!
//! let document = service.convert(&p).unwrap();
//! assert_eq!(document.plain_text(), "Hello World");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use blockdown::BlockdownService;
//!
//! let service = BlockdownService::new();
//! let document = service.convert_html("<h1>Hello World</h1>").unwrap();
//! assert_eq!(document.len(), 1);
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod service;

#[cfg(feature = "html")]
pub use html::parse_markup;
pub use node::{MarkupNode, Tag};
pub use service::{BlockdownService, ConvertOptions};

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The markup tree nests deeper than the configured guard allows
    #[error("content too complex: nesting depth {depth} exceeds the limit")]
    ContentTooComplex { depth: usize },

    /// Upstream markup could not be turned into a tree
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
