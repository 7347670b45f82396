use crate::{
    html::{Attributes, HtmlNode, LeafNode},
    parsing::{
        ParseError,
        inline::{SpanKind, TextSpan, tokenize},
    },
};

/// Maps one span to its leaf node.
///
/// Plain text becomes an untagged leaf. Images have an empty value and carry
/// `src` then `alt`.
pub fn span_to_node(span: TextSpan) -> HtmlNode {
    let leaf = match span.kind {
        SpanKind::Plain => LeafNode::text(span.text),
        SpanKind::Bold => LeafNode::new("b", span.text),
        SpanKind::Italic => LeafNode::new("i", span.text),
        SpanKind::Code => LeafNode::new("code", span.text),
        SpanKind::Link => LeafNode::new("a", span.text)
            .with_attributes(Attributes::new().with("href", span.url.unwrap_or_default())),
        SpanKind::Image => LeafNode::new("img", "").with_attributes(
            Attributes::new()
                .with("src", span.url.unwrap_or_default())
                .with("alt", span.text),
        ),
    };
    leaf.into()
}

/// Tokenizes `text` and maps every span to a leaf.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(tokenize(text)?.into_iter().map(span_to_node).collect())
}
