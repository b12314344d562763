//! BlockdownService - the main entry point for markup to document
//! block conversion.

use blockdown_core::Document;
use log::debug;

use crate::convert;
use crate::node::MarkupNode;
use crate::Result;

/// Options for BlockdownService
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Maximum markup nesting depth before conversion fails closed.
    ///
    /// Recursion depth equals nesting depth, so this bounds stack use
    /// for pathological input.
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// The main service for converting markup trees to document blocks
pub struct BlockdownService {
    options: ConvertOptions,
}

impl BlockdownService {
    /// Create a new BlockdownService with default options
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Create a BlockdownService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert a markup tree to an assembled document.
    ///
    /// The node is borrowed for the duration of this call only and is
    /// never mutated. Conversion is pure and synchronous; independent
    /// calls share no state.
    pub fn convert(&self, root: &MarkupNode) -> Result<Document> {
        let document = convert::convert(root, &self.options)?;
        debug!("converted markup tree into {} blocks", document.len());
        Ok(document)
    }

    /// Parse an HTML fragment and convert it in one step
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<Document> {
        let tree = crate::html::parse_markup(html);
        self.convert(&tree)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }
}

impl Default for BlockdownService {
    fn default() -> Self {
        Self::new()
    }
}
