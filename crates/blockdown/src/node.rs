//! Markup source tree for rich-text conversion.
//!
//! This module provides the owned node structure the converter walks.
//! Any parser (scraper, an editor's own serializer, hand-built trees in
//! tests) can produce this structure to use blockdown.

/// The closed tag vocabulary recognized by the converter.
///
/// Names outside the vocabulary are carried as [`Tag::Other`] and
/// treated as transparent containers: their children are processed as
/// if the tag were absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Bold emphasis (`strong`, `b`)
    Strong,
    /// Italic emphasis (`em`, `i`)
    Em,
    /// Underline (`u`)
    Underline,
    /// Strikethrough (`strike`, `s`)
    Strike,
    /// Top-level heading (`h1`)
    H1,
    /// Second-level heading (`h2`)
    H2,
    /// Third-level heading (`h3`)
    H3,
    /// Body paragraph (`p`)
    Paragraph,
    /// Block quotation (`blockquote`)
    Blockquote,
    /// Bulleted list (`ul`)
    UnorderedList,
    /// Numbered list (`ol`)
    OrderedList,
    /// List item (`li`)
    ListItem,
    /// Explicit line break (`br`)
    LineBreak,
    /// Any unrecognized tag, kept by name
    Other(String),
}

impl Tag {
    /// Map a tag name to its vocabulary entry (case-insensitive)
    pub fn from_name(name: &str) -> Tag {
        match name.to_ascii_lowercase().as_str() {
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Em,
            "u" => Tag::Underline,
            "strike" | "s" => Tag::Strike,
            "h1" => Tag::H1,
            "h2" => Tag::H2,
            "h3" => Tag::H3,
            "p" => Tag::Paragraph,
            "blockquote" => Tag::Blockquote,
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "li" => Tag::ListItem,
            "br" => Tag::LineBreak,
            other => Tag::Other(other.to_string()),
        }
    }

    /// The canonical lowercase name of this tag
    pub fn name(&self) -> &str {
        match self {
            Tag::Strong => "strong",
            Tag::Em => "em",
            Tag::Underline => "u",
            Tag::Strike => "strike",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Paragraph => "p",
            Tag::Blockquote => "blockquote",
            Tag::UnorderedList => "ul",
            Tag::OrderedList => "ol",
            Tag::ListItem => "li",
            Tag::LineBreak => "br",
            Tag::Other(name) => name,
        }
    }

    /// Check if this tag introduces an inline formatting flag
    pub fn is_emphasis(&self) -> bool {
        matches!(self, Tag::Strong | Tag::Em | Tag::Underline | Tag::Strike)
    }
}

/// A node in the markup source tree.
///
/// Trees are finite, acyclic, and owned by the caller for the duration
/// of a conversion; the converter never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// Literal characters, whitespace preserved exactly as authored
    Text(String),

    /// A tagged container with ordered children
    Element { tag: Tag, children: Vec<MarkupNode> },
}

impl MarkupNode {
    /// Create an element node from a tag name
    pub fn element(tag_name: &str) -> Self {
        Self::Element {
            tag: Tag::from_name(tag_name),
            children: Vec::new(),
        }
    }

    /// Create an element node with children
    pub fn with_children(tag_name: &str, children: Vec<MarkupNode>) -> Self {
        Self::Element {
            tag: Tag::from_name(tag_name),
            children,
        }
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        Self::Text(content.to_string())
    }

    /// Append a child; has no effect on text nodes
    pub fn add_child(&mut self, child: MarkupNode) {
        if let Self::Element { children, .. } = self {
            children.push(child);
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The tag of an element node, `None` for text
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Self::Element { tag, .. } => Some(tag),
            Self::Text(_) => None,
        }
    }

    /// All child nodes in source order; empty for text nodes
    pub fn children(&self) -> impl Iterator<Item = &MarkupNode> {
        let children: &[MarkupNode] = match self {
            Self::Element { children, .. } => children,
            Self::Text(_) => &[],
        };
        children.iter()
    }

    /// Only element children, in source order
    pub fn element_children(&self) -> impl Iterator<Item = &MarkupNode> {
        self.children().filter(|node| node.is_element())
    }

    /// All text content from this node and its descendants, in document
    /// order, tags stripped
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element { children, .. } => {
                children.iter().map(|child| child.text_content()).collect()
            }
        }
    }
}
