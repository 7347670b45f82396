//! # Rendering
//!
//! Turns classified blocks into an HTML node tree.
//!
//! ## Flow
//!
//! `parse_to_tree` segments and classifies the document, converts every block
//! in order (`block`), and wraps the results under one root node. Inline text
//! goes through the tokenizer and becomes leaves (`inline`).
//!
//! Blockquotes strip one `>` level and recurse into the same pipeline with a
//! depth counter; past [`RenderOptions::max_quote_depth`] the parse fails with
//! [`ParseError::RecursionLimitExceeded`].

pub mod block;
pub mod inline;

pub use block::convert_block;
pub use inline::{span_to_node, text_to_children};

use crate::{
    html::{HtmlError, HtmlNode, ParentNode, escape_tree},
    parsing::{ParseError, parse_document},
};

/// Default bound on blockquote nesting.
pub const DEFAULT_MAX_QUOTE_DEPTH: usize = 32;

/// Knobs for a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest allowed blockquote nesting.
    pub max_quote_depth: usize,
    /// Escape leaf values and attribute values before serializing.
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_quote_depth: DEFAULT_MAX_QUOTE_DEPTH,
            escape_html: false,
        }
    }
}

/// Either stage of [`render_fragment`] can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Html(#[from] HtmlError),
}

/// Parses `document` and wraps every block's subtree under `root_tag`.
pub fn parse_to_tree(document: &str, root_tag: &str) -> Result<ParentNode, ParseError> {
    parse_to_tree_with(document, root_tag, &RenderOptions::default())
}

pub fn parse_to_tree_with(
    document: &str,
    root_tag: &str,
    options: &RenderOptions,
) -> Result<ParentNode, ParseError> {
    build_tree(document, root_tag, options, 0)
}

/// Parses, optionally escapes, and serializes in one go.
pub fn render_fragment(
    document: &str,
    root_tag: &str,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let tree = HtmlNode::from(parse_to_tree_with(document, root_tag, options)?);
    let tree = if options.escape_html {
        escape_tree(&tree)
    } else {
        tree
    };
    Ok(tree.to_html()?)
}

pub(crate) fn build_tree(
    document: &str,
    root_tag: &str,
    options: &RenderOptions,
    depth: usize,
) -> Result<ParentNode, ParseError> {
    if depth > options.max_quote_depth {
        return Err(ParseError::RecursionLimitExceeded {
            limit: options.max_quote_depth,
        });
    }

    let doc = parse_document(document);
    let children = doc
        .blocks
        .iter()
        .map(|node| block::block_to_node(node, options, depth))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParentNode::new(root_tag, children))
}
