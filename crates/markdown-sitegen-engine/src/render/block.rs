use crate::{
    html::{HtmlNode, ParentNode},
    parsing::{
        ParseError,
        blocks::{
            Block, BlockNode, BlockType,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        },
    },
};

use super::{RenderOptions, build_tree, inline::text_to_children};

/// Converts a classified block into its node subtree.
///
/// `depth` is the current blockquote nesting level; quotes recurse back into
/// [`build_tree`] one level deeper.
pub(crate) fn block_to_node(
    node: &BlockNode<'_>,
    options: &RenderOptions,
    depth: usize,
) -> Result<HtmlNode, ParseError> {
    let text = node.block.as_str();
    let mismatch = || ParseError::InvalidBlockType {
        expected: node.kind,
    };

    let parent = match node.kind {
        BlockType::Paragraph => ParentNode::new("p", text_to_children(&Paragraph::text(text))?),
        BlockType::Heading { level } => {
            let heading = Heading::strip(text, level)?;
            ParentNode::new(Heading::tag(level), text_to_children(heading.trim())?)
        }
        BlockType::Code => {
            let inner = CodeFence::inner(text).ok_or_else(mismatch)?;
            let code = ParentNode::new("code", text_to_children(inner)?);
            ParentNode::new("pre", vec![code.into()])
        }
        BlockType::Quote => {
            let inner = BlockQuote::unquote(text).ok_or_else(mismatch)?;
            build_tree(&inner, "blockquote", options, depth + 1)?
        }
        BlockType::UnorderedList => {
            list("ul", UnorderedList::items(text).ok_or_else(mismatch)?)?
        }
        BlockType::OrderedList => list("ol", OrderedList::items(text).ok_or_else(mismatch)?)?,
    };

    Ok(parent.into())
}

/// Converts `block` as if it had been classified `kind`, at the top level.
///
/// # Errors
/// [`ParseError::InvalidBlockType`] when the text does not have the shape
/// `kind` requires (e.g. a list line without its marker), plus any inline or
/// heading error.
pub fn convert_block(block: Block<'_>, kind: BlockType) -> Result<HtmlNode, ParseError> {
    block_to_node(&BlockNode { kind, block }, &RenderOptions::default(), 0)
}

fn list(tag: &str, items: Vec<&str>) -> Result<ParentNode, ParseError> {
    let children = items
        .into_iter()
        .map(|item| Ok(ParentNode::new("li", text_to_children(item.trim())?).into()))
        .collect::<Result<Vec<HtmlNode>, ParseError>>()?;
    Ok(ParentNode::new(tag, children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn html(text: &str, kind: BlockType) -> String {
        convert_block(Block::new(text), kind)
            .unwrap()
            .to_html()
            .unwrap()
    }

    #[test]
    fn paragraph_joins_lines() {
        assert_eq!(
            html("one **two**\nthree", BlockType::Paragraph),
            "<p>one <b>two</b> three</p>"
        );
    }

    #[rstest]
    #[case("# Title", 1, "<h1>Title</h1>")]
    #[case("### Deep *one*", 3, "<h3>Deep <i>one</i></h3>")]
    fn headings(#[case] text: &str, #[case] level: u8, #[case] expected: &str) {
        assert_eq!(html(text, BlockType::Heading { level }), expected);
    }

    #[test]
    fn code_keeps_inner_whitespace() {
        assert_eq!(
            html("```\nfn main() {}\n```", BlockType::Code),
            "<pre><code>\nfn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn code_content_is_still_tokenized() {
        assert_eq!(
            html("```\nlet x = **y**;\n```", BlockType::Code),
            "<pre><code>\nlet x = <b>y</b>;\n</code></pre>"
        );
    }

    #[test]
    fn quote_recurses() {
        assert_eq!(
            html("> Outer\n>\n> - inner item", BlockType::Quote),
            "<blockquote><p>Outer</p><ul><li>inner item</li></ul></blockquote>"
        );
    }

    #[test]
    fn nested_quote() {
        assert_eq!(
            html("> a\n> > b", BlockType::Quote),
            "<blockquote><p>a > b</p></blockquote>"
        );
        assert_eq!(
            html("> > b", BlockType::Quote),
            "<blockquote><blockquote><p>b</p></blockquote></blockquote>"
        );
    }

    #[rstest]
    #[case::list_items("- a   \n- b", BlockType::UnorderedList, "<ul><li>a</li><li>b</li></ul>")]
    #[case::ordered_items("1. a  \n2.  b", BlockType::OrderedList, "<ol><li>a</li><li>b</li></ol>")]
    #[case::paragraph_lines("  hello world  \nagain ", BlockType::Paragraph, "<p>hello world again</p>")]
    #[case::heading_lines("## Title  \nmore  ", BlockType::Heading { level: 2 }, "<h2>Title  \nmore</h2>")]
    fn plain_text_is_trimmed(#[case] text: &str, #[case] kind: BlockType, #[case] expected: &str) {
        assert_eq!(html(text, kind), expected);
    }

    #[test]
    fn code_whitespace_is_not_trimmed() {
        assert_eq!(
            html("```\n   indented   \n```", BlockType::Code),
            "<pre><code>\n   indented   \n</code></pre>"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            html("- Item 1\n- Item *2*", BlockType::UnorderedList),
            "<ul><li>Item 1</li><li>Item <i>2</i></li></ul>"
        );
    }

    #[test]
    fn ordered_list_past_nine_items() {
        let text = (1..=10)
            .map(|i| format!("{i}. Item {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let out = html(&text, BlockType::OrderedList);
        assert!(out.starts_with("<ol><li>Item 1</li>"));
        assert!(out.ends_with("<li>Item 10</li></ol>"));
    }

    #[rstest]
    #[case("plain text", BlockType::Code)]
    #[case("plain text", BlockType::Quote)]
    #[case("plain text", BlockType::UnorderedList)]
    #[case("2. starts at two", BlockType::OrderedList)]
    fn mismatched_type_is_rejected(#[case] text: &str, #[case] kind: BlockType) {
        assert_eq!(
            convert_block(Block::new(text), kind),
            Err(ParseError::InvalidBlockType { expected: kind })
        );
    }

    #[test]
    fn invalid_heading_level_is_rejected() {
        assert!(matches!(
            convert_block(Block::new("# Title"), BlockType::Heading { level: 9 }),
            Err(ParseError::InvalidHeading { level: 9, .. })
        ));
    }

    #[test]
    fn unbalanced_inline_in_list_item_fails_block() {
        assert!(matches!(
            convert_block(Block::new("- ok\n- `broken"), BlockType::UnorderedList),
            Err(ParseError::UnbalancedDelimiter { .. })
        ));
    }
}
