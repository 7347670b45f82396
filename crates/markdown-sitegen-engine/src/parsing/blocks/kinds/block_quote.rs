/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or converter code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether every line of `block` (after trimming) starts with `>`.
    pub fn is_quote(block: &str) -> bool {
        block
            .lines()
            .all(|line| line.trim_start().starts_with(Self::PREFIX))
    }

    /// Strips one `>` and the whitespace after it from a single line.
    ///
    /// Only one level is removed: `> > nested` becomes `> nested`, which the
    /// recursive parse then sees as a quote again.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.trim_start()
            .strip_prefix(Self::PREFIX)
            .map(str::trim_start)
    }

    /// Strips one quote level from every line and rejoins them with `\n`.
    pub fn unquote(block: &str) -> Option<String> {
        let lines = block
            .lines()
            .map(Self::strip_prefix)
            .collect::<Option<Vec<_>>>()?;
        Some(lines.join("\n"))
    }
}
