//! Convert a markup tree into document blocks.
//!
//! This module transforms an owned markup tree into the block AST
//! defined in blockdown-core: a recursive walker flattens inline
//! content into formatted runs, and a classifier maps each block-level
//! node onto a typed block with its style.

use blockdown_core::{assemble, BlockStyle, Document, DocumentBlock, Formatting, Run};

use crate::node::{MarkupNode, Tag};
use crate::service::ConvertOptions;
use crate::{Error, Result};

/// Convert a markup tree to a document.
///
/// The root is usually a container whose children are the block-level
/// nodes; passing a block element directly converts that single block.
pub(crate) fn convert(root: &MarkupNode, options: &ConvertOptions) -> Result<Document> {
    let mut blocks = Vec::new();
    classify(root, options, 0, &mut blocks)?;

    // A tree with text but no recognized block structure still yields a
    // readable document: one paragraph holding the full plain text.
    if blocks.is_empty() {
        let text = root.text_content();
        let text = text.trim();
        if !text.is_empty() {
            blocks.push(DocumentBlock::Paragraph {
                runs: vec![Run::plain(text)],
                style: BlockStyle::paragraph(),
            });
        }
    }

    Ok(assemble(blocks))
}

/// Classify one block-level node, appending its blocks to `out`
fn classify(
    node: &MarkupNode,
    options: &ConvertOptions,
    depth: usize,
    out: &mut Vec<DocumentBlock>,
) -> Result<()> {
    if depth > options.max_depth {
        return Err(Error::ContentTooComplex { depth });
    }

    let MarkupNode::Element { tag, children } = node else {
        // Bare text at block level is only recovered by the fallback.
        return Ok(());
    };

    match tag {
        Tag::H1 | Tag::H2 | Tag::H3 => {
            let level = match tag {
                Tag::H1 => 1,
                Tag::H2 => 2,
                _ => 3,
            };
            let runs = extract_runs(node, Formatting::default(), depth, options)?;
            // Empty headings are dropped; only paragraphs keep a blank.
            if !runs.is_empty() {
                out.push(DocumentBlock::Heading {
                    level,
                    runs,
                    style: BlockStyle::heading(level),
                });
            }
        }

        Tag::Paragraph => {
            let mut runs = extract_runs(node, Formatting::default(), depth, options)?;
            if runs.is_empty() {
                // Preserve the author's vertical spacing intent.
                runs.push(Run::blank());
            }
            out.push(DocumentBlock::Paragraph {
                runs,
                style: BlockStyle::paragraph(),
            });
        }

        Tag::Blockquote => {
            let runs = extract_runs(node, Formatting::default(), depth, options)?;
            if !runs.is_empty() {
                out.push(DocumentBlock::Quote {
                    runs,
                    style: BlockStyle::quote(),
                });
            }
        }

        Tag::UnorderedList => classify_list(children, false, options, depth, out)?,
        Tag::OrderedList => classify_list(children, true, options, depth, out)?,

        Tag::LineBreak => out.push(DocumentBlock::LineBreak {
            style: BlockStyle::line_break(),
        }),

        // Everything else, emphasis tags at block level included, is a
        // transparent container.
        Tag::Strong
        | Tag::Em
        | Tag::Underline
        | Tag::Strike
        | Tag::ListItem
        | Tag::Other(_) => {
            for child in node.element_children() {
                classify(child, options, depth + 1, out)?;
            }
        }
    }

    Ok(())
}

/// Emit one list item block per `li` child.
///
/// Numbered ordinals follow the item's source position within the list,
/// so an item skipped for having no text leaves a gap in the numbering.
fn classify_list(
    children: &[MarkupNode],
    ordered: bool,
    options: &ConvertOptions,
    depth: usize,
    out: &mut Vec<DocumentBlock>,
) -> Result<()> {
    let items = children
        .iter()
        .filter(|child| child.tag() == Some(&Tag::ListItem));

    for (index, item) in items.enumerate() {
        let runs = extract_runs(item, Formatting::default(), depth + 1, options)?;
        if runs.is_empty() {
            continue;
        }
        let ordinal = ordered.then(|| (index + 1) as u32);
        out.push(DocumentBlock::ListItem {
            ordinal,
            runs,
            style: BlockStyle::list_item(),
        });
    }

    Ok(())
}

/// Flatten a subtree into formatted runs.
///
/// `inherited` is copied and extended on the way down, never mutated in
/// place, so sibling subtrees cannot influence each other and flags are
/// monotonic along any root-to-leaf path. Whitespace passes through
/// untouched.
fn extract_runs(
    node: &MarkupNode,
    inherited: Formatting,
    depth: usize,
    options: &ConvertOptions,
) -> Result<Vec<Run>> {
    if depth > options.max_depth {
        return Err(Error::ContentTooComplex { depth });
    }

    match node {
        MarkupNode::Text(text) => {
            if text.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(vec![Run::new(text.as_str(), inherited)])
            }
        }
        MarkupNode::Element { tag, children } => {
            let effective = extend_formatting(inherited, tag);
            let mut runs = Vec::new();
            for child in children {
                runs.extend(extract_runs(child, effective, depth + 1, options)?);
            }
            Ok(runs)
        }
    }
}

/// The formatting in effect below `tag`, given the inherited state
fn extend_formatting(inherited: Formatting, tag: &Tag) -> Formatting {
    match tag {
        Tag::Strong => Formatting {
            bold: true,
            ..inherited
        },
        Tag::Em => Formatting {
            italic: true,
            ..inherited
        },
        Tag::Underline => Formatting {
            underline: true,
            ..inherited
        },
        Tag::Strike => Formatting {
            strike: true,
            ..inherited
        },
        _ => inherited,
    }
}
