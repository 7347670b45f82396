use crate::parsing::ParseError;

/// Heading block type with owned marker constant.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level if the first line of `block` is
    /// 1–6 `#`, at least one space, then non-empty text.
    pub fn level(block: &str) -> Option<u8> {
        let first = block.lines().next()?;
        let hashes = first.len() - first.trim_start_matches(Self::MARKER).len();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = first[hashes..].strip_prefix(' ')?;
        if rest.trim().is_empty() {
            return None;
        }
        Some(hashes as u8)
    }

    /// Strips `level` markers and the spaces after them, returning the text.
    ///
    /// # Errors
    /// [`ParseError::InvalidHeading`] if `level` is outside 1..=6, the block
    /// does not open with exactly that marker, or the remaining text is empty.
    pub fn strip(block: &str, level: u8) -> Result<&str, ParseError> {
        let invalid = || ParseError::InvalidHeading {
            level,
            text: block.to_string(),
        };
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return Err(invalid());
        }
        let marker = Self::MARKER.to_string().repeat(level as usize) + " ";
        let text = block
            .strip_prefix(marker.as_str())
            .ok_or_else(invalid)?
            .trim_start_matches(' ');
        if text.trim().is_empty() {
            return Err(invalid());
        }
        Ok(text)
    }

    /// The HTML tag for a heading level, `h1` to `h6`.
    pub fn tag(level: u8) -> String {
        format!("h{level}")
    }
}
