/// Fenced code block type with owned fence constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Content between the opening and closing fence, whitespace untouched.
    ///
    /// `None` unless the block both starts and ends with a fence and the two
    /// fences do not overlap.
    pub fn inner(block: &str) -> Option<&str> {
        block
            .strip_prefix(Self::BACKTICKS)?
            .strip_suffix(Self::BACKTICKS)
    }

    /// Whether `block` is a fenced code block.
    ///
    /// A fence pair with only whitespace between is not code; such a block
    /// falls through to paragraph.
    pub fn is_fenced(block: &str) -> bool {
        Self::inner(block).is_some_and(|inner| !inner.trim().is_empty())
    }
}
