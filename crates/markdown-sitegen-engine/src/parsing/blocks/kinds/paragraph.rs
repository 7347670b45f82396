/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// classifier predicate matches. Inline parsing is applied to paragraph text.
pub struct Paragraph;

impl Paragraph {
    /// Joins the paragraph's trimmed lines with a single space.
    pub fn text(block: &str) -> String {
        block.lines().map(str::trim).collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_lines_with_space() {
        assert_eq!(
            Paragraph::text("This is a paragraph\nwith a new line"),
            "This is a paragraph with a new line"
        );
    }

    #[test]
    fn trims_each_line() {
        assert_eq!(Paragraph::text("one   
  two"), "one two");
    }
}
