use std::fmt;

use serde::Serialize;

/// A maximal run of non-blank lines, trimmed, borrowed from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Block<'a> {
    text: &'a str,
}

impl<'a> Block<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

/// The classification of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockType {
    /// Default when no other predicate matches.
    Paragraph,
    /// `#` to `######` followed by a space and text.
    Heading {
        level: u8,
    },
    /// Opens and closes with a ```` ``` ```` fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `* `, or every line starts with `- `.
    UnorderedList,
    /// Line *i* starts with `"{i}. "`.
    OrderedList,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Paragraph => write!(f, "paragraph"),
            BlockType::Heading { level } => write!(f, "heading({level})"),
            BlockType::Code => write!(f, "code"),
            BlockType::Quote => write!(f, "quote"),
            BlockType::UnorderedList => write!(f, "unordered_list"),
            BlockType::OrderedList => write!(f, "ordered_list"),
        }
    }
}

/// A block together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockNode<'a> {
    pub kind: BlockType,
    pub block: Block<'a>,
}
