pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlError, HtmlNode, LeafNode, ParentNode, serialize};
pub use io::*;
pub use models::SourcePage;
pub use parsing::{
    ParseError,
    blocks::{Block, BlockType},
    inline::{SpanKind, TextSpan},
};
pub use render::{
    DEFAULT_MAX_QUOTE_DEPTH, RenderError, RenderOptions, parse_to_tree, parse_to_tree_with,
    render_fragment,
};
