//! HTML parsing support.
//!
//! This module parses HTML strings into the owned [`MarkupNode`] tree
//! consumed by the converter. Parsing is an explicit step: the returned
//! tree is scoped to the caller, with no process-wide parser state.
//!
//! Malformed markup that the parser cannot make sense of degrades to
//! whatever tree html5ever recovers; it never panics. Callers that need
//! a hard failure for unparseable upstream input should surface
//! [`crate::Error::MalformedInput`] at their own boundary.

use scraper::{ElementRef, Html, Node as DomNode};

use crate::node::{MarkupNode, Tag};

/// Parse an HTML fragment into a markup tree.
///
/// The returned root is a transparent container whose children are the
/// fragment's top-level nodes.
///
/// # Example
///
/// ```rust
/// use blockdown::{parse_markup, BlockdownService};
///
/// let tree = parse_markup("<h1>Hello <em>World</em></h1>");
///
/// let service = BlockdownService::new();
/// let document = service.convert(&tree).unwrap();
/// assert_eq!(document.plain_text(), "Hello World");
/// ```
pub fn parse_markup(html: &str) -> MarkupNode {
    let fragment = Html::parse_fragment(html);
    dom_to_markup(fragment.root_element())
}

/// Convert a scraper element to our owned node structure
fn dom_to_markup(element: ElementRef) -> MarkupNode {
    let tag = Tag::from_name(element.value().name());

    let mut children = Vec::new();
    for child in element.children() {
        match child.value() {
            DomNode::Text(text) => {
                children.push(MarkupNode::text(&text.text));
            }
            DomNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    children.push(dom_to_markup(child_element));
                }
            }
            _ => {}
        }
    }

    MarkupNode::Element { tag, children }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockdownService;
    use blockdown_core::DocumentBlock;

    #[test]
    fn test_parse_simple_fragment() {
        let tree = parse_markup("<p>Hello World</p>");
        assert!(tree.is_element());
        // The fragment root is a transparent `html` container.
        assert_eq!(tree.tag(), Some(&Tag::Other("html".to_string())));
        assert_eq!(tree.text_content(), "Hello World");
    }

    #[test]
    fn test_parse_preserves_whitespace() {
        let tree = parse_markup("<p>Hello <strong>world</strong></p>");
        let service = BlockdownService::new();
        let document = service.convert(&tree).unwrap();
        assert_eq!(document.plain_text(), "Hello world");
    }

    #[test]
    fn test_convert_html_heading() {
        let service = BlockdownService::new();
        let document = service.convert_html("<h2>Section</h2>").unwrap();
        assert!(matches!(
            document.blocks[0],
            DocumentBlock::Heading { level: 2, .. }
        ));
    }

    #[test]
    fn test_convert_html_formatted_paragraph() {
        let service = BlockdownService::new();
        let document = service
            .convert_html("<p>Hello <strong>world</strong></p>")
            .unwrap();
        assert_eq!(document.len(), 1);
        let runs = document.blocks[0].runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "Hello ");
        assert!(runs[1].formatting.bold);
    }

    #[test]
    fn test_convert_html_list() {
        let service = BlockdownService::new();
        let document = service
            .convert_html("<ol><li>One</li><li>Two</li></ol>")
            .unwrap();
        let ordinals: Vec<Option<u32>> = document
            .iter()
            .map(|block| match block {
                DocumentBlock::ListItem { ordinal, .. } => *ordinal,
                other => panic!("expected a list item, got {other:?}"),
            })
            .collect();
        assert_eq!(ordinals, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_convert_html_bare_text_falls_back() {
        let service = BlockdownService::new();
        let document = service.convert_html("no markup at all").unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document.plain_text(), "no markup at all");
    }

    #[test]
    fn test_convert_html_unknown_tags_are_transparent() {
        let service = BlockdownService::new();
        let document = service
            .convert_html("<article><p>inside</p></article>")
            .unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document.plain_text(), "inside");
    }
}
