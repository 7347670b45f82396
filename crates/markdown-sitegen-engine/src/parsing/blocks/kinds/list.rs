/// Unordered list block type with owned marker constants.
pub struct UnorderedList;

/// Ordered list block type (`1. `, `2. `, ...).
pub struct OrderedList;

impl UnorderedList {
    /// Accepted item markers. A block must use one of them on every line.
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// The marker used uniformly by every line of `block`, if any.
    pub fn marker(block: &str) -> Option<&'static str> {
        Self::MARKERS
            .into_iter()
            .find(|marker| block.lines().all(|line| line.starts_with(marker)))
    }

    /// Item text for each line, marker removed.
    pub fn items(block: &str) -> Option<Vec<&str>> {
        let marker = Self::marker(block)?;
        block
            .lines()
            .map(|line| line.strip_prefix(marker))
            .collect()
    }
}

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Byte length of the `"{index}. "` prefix if `line` starts with it.
    pub fn prefix_len(line: &str, index: usize) -> Option<usize> {
        let prefix = format!("{index}{}", Self::SEPARATOR);
        line.starts_with(&prefix).then_some(prefix.len())
    }

    /// Whether line *i* (1-based) of `block` starts with `"{i}. "`.
    pub fn is_ordered(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| Self::prefix_len(line, i + 1).is_some())
    }

    /// Item text for each line, numeric prefix removed.
    ///
    /// The prefix length follows the actual number, so items past 9 keep
    /// their first character.
    pub fn items(block: &str) -> Option<Vec<&str>> {
        block
            .lines()
            .enumerate()
            .map(|(i, line)| Self::prefix_len(line, i + 1).map(|len| &line[len..]))
            .collect()
    }
}
