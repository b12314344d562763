//! blockdown-core - document block AST and assembly
//!
//! This crate provides the core data structures for converted documents.
//! It is used by `blockdown` (which produces blocks from markup trees)
//! and `blockdown-export` (which interleaves blocks with collection
//! metadata).
//!
//! # Architecture
//!
//! ```text
//! Markup Tree ──convert──▶ ┌─────────────────┐
//!                          │                 │
//!                          │ Document Blocks │ ──▶ external packager
//! Collection Metadata ────▶│                 │
//!                          └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blockdown_core::{assemble, BlockStyle, DocumentBlock, Formatting, Run};
//!
//! let blocks = vec![
//!     DocumentBlock::Heading {
//!         level: 1,
//!         runs: vec![Run::plain("Hello World")],
//!         style: BlockStyle::heading(1),
//!     },
//!     DocumentBlock::Paragraph {
//!         runs: vec![
//!             Run::plain("This is "),
//!             Run::new("bold", Formatting { bold: true, ..Formatting::default() }),
//!             Run::plain(" text."),
//!         ],
//!         style: BlockStyle::paragraph(),
//!     },
//! ];
//!
//! let document = assemble(blocks);
//! assert_eq!(document.plain_text(), "Hello WorldThis is bold text.");
//! ```

mod ast;
mod document;
mod style;

pub use ast::{DocumentBlock, Formatting, Run};
pub use document::{assemble, Document};
pub use style::{BlockStyle, MUTED_COLOR};
