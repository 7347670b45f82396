pub mod blocks;
pub mod inline;

use blocks::{BlockNode, BlockType, MarkdownBlockClassifier, segment};

/// Errors raised while turning markdown into a node tree.
///
/// Every variant aborts the conversion of the whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unbalanced delimiter {delimiter:?}: found {count} occurrences")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        count: usize,
    },
    #[error("Invalid heading at level {level}: {text:?}")]
    InvalidHeading { level: u8, text: String },
    #[error("Block text does not match block type {expected}")]
    InvalidBlockType { expected: BlockType },
    #[error("Blockquote nesting exceeds the limit of {limit}")]
    RecursionLimitExceeded { limit: usize },
}

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<BlockNode<'a>>,
}

/// Segments and classifies a document.
pub fn parse_document(document: &str) -> ParsedDoc<'_> {
    let classifier = MarkdownBlockClassifier;
    ParsedDoc {
        blocks: segment(document)
            .into_iter()
            .map(|block| classifier.node(block))
            .collect(),
    }
}
