//! Block-level style descriptors
//!
//! Sizes are in half-points and spacing in twentieths of a point,
//! matching the conventions of word-processor output formats.

/// Muted gray used by quotes and metadata lines
pub const MUTED_COLOR: &str = "666666";

/// Style parameters applied to a whole block.
///
/// Each block kind has a fixed default style; export drivers may build
/// custom descriptors for metadata blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStyle {
    /// Text size in half-points
    pub size: u32,

    /// Text color as an RRGGBB hex string, `None` for the document default
    pub color: Option<String>,

    /// Render the whole block in italics, on top of any run formatting
    pub italic: bool,

    /// Spacing before the block
    pub spacing_before: u32,

    /// Spacing after the block
    pub spacing_after: u32,
}

impl BlockStyle {
    /// Style for a heading of the given level (1-3)
    pub fn heading(level: u8) -> Self {
        let (size, spacing_before, spacing_after) = match level {
            1 => (32, 400, 200),
            2 => (28, 300, 150),
            _ => (24, 250, 125),
        };
        Self {
            size,
            color: None,
            italic: false,
            spacing_before,
            spacing_after,
        }
    }

    /// Style for a body paragraph
    pub fn paragraph() -> Self {
        Self {
            size: 22,
            color: None,
            italic: false,
            spacing_before: 0,
            spacing_after: 200,
        }
    }

    /// Style for a block quotation
    pub fn quote() -> Self {
        Self {
            size: 22,
            color: Some(MUTED_COLOR.to_string()),
            italic: true,
            spacing_before: 200,
            spacing_after: 200,
        }
    }

    /// Style for a list item
    pub fn list_item() -> Self {
        Self {
            size: 22,
            color: None,
            italic: false,
            spacing_before: 0,
            spacing_after: 150,
        }
    }

    /// Style for an explicit line break
    pub fn line_break() -> Self {
        Self {
            size: 22,
            color: None,
            italic: false,
            spacing_before: 0,
            spacing_after: 100,
        }
    }
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self::paragraph()
    }
}
