use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{Block, BlockNode, BlockType},
};

/// Classifies whole blocks for the conversion phase.
///
/// Each block is classified on its text alone, with no reference to the
/// blocks around it.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    /// Classifies a block into a [`BlockType`].
    ///
    /// Predicates are tried in priority order and the first match wins:
    /// heading, code, quote, unordered list, ordered list, then paragraph.
    pub fn classify(&self, block: &Block<'_>) -> BlockType {
        let text = block.as_str();

        if let Some(level) = Heading::level(text) {
            return BlockType::Heading { level };
        }
        if CodeFence::is_fenced(text) {
            return BlockType::Code;
        }
        if BlockQuote::is_quote(text) {
            return BlockType::Quote;
        }
        if UnorderedList::marker(text).is_some() {
            return BlockType::UnorderedList;
        }
        if OrderedList::is_ordered(text) {
            return BlockType::OrderedList;
        }
        BlockType::Paragraph
    }

    /// Classifies and pairs a block with its type.
    pub fn node<'a>(&self, block: Block<'a>) -> BlockNode<'a> {
        BlockNode {
            kind: self.classify(&block),
            block,
        }
    }
}
