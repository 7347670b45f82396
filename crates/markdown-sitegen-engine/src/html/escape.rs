//! Optional escaping pass.
//!
//! The serializer writes values verbatim. When page content comes from an
//! untrusted source, run the tree through [`escape_tree`] before serializing.

use super::{Attributes, HtmlNode, LeafNode, ParentNode};

/// Returns a copy of `node` with leaf values escaped for text context and
/// attribute values escaped for double-quoted attribute context.
///
/// Tags are left untouched; they are validated at serialization time.
pub fn escape_tree(node: &HtmlNode) -> HtmlNode {
    match node {
        HtmlNode::Leaf(leaf) => HtmlNode::Leaf(LeafNode {
            tag: leaf.tag.clone(),
            value: html_escape::encode_text(&leaf.value).into_owned(),
            attributes: escape_attributes(&leaf.attributes),
        }),
        HtmlNode::Parent(parent) => HtmlNode::Parent(ParentNode {
            tag: parent.tag.clone(),
            children: parent.children.iter().map(escape_tree).collect(),
            attributes: escape_attributes(&parent.attributes),
        }),
    }
}

fn escape_attributes(attributes: &Attributes) -> Attributes {
    attributes
        .iter()
        .map(|(k, v)| (k, html_escape::encode_double_quoted_attribute(v).into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_text_values() {
        let node: HtmlNode = ParentNode::new(
            "p",
            vec![LeafNode::text("a < b & c").into(), LeafNode::new("code", "<div>").into()],
        )
        .into();
        let escaped = escape_tree(&node);
        assert_eq!(
            escaped.to_html().unwrap(),
            "<p>a &lt; b &amp; c<code>&lt;div&gt;</code></p>"
        );
    }

    #[test]
    fn escapes_attribute_quotes() {
        let node: HtmlNode = LeafNode::new("a", "x")
            .with_attributes(Attributes::new().with("href", "/q?a=\"1\""))
            .into();
        let html = escape_tree(&node).to_html().unwrap();
        assert_eq!(html, r#"<a href="/q?a=&quot;1&quot;">x</a>"#);
    }

    #[test]
    fn original_tree_is_untouched() {
        let node: HtmlNode = LeafNode::text("<b>").into();
        let _ = escape_tree(&node);
        assert_eq!(node.to_html().unwrap(), "<b>");
    }
}
