use serde::Serialize;

use super::{Attributes, HtmlError};

/// A node in the generated HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

/// A node holding text only.
///
/// An untagged leaf renders its value verbatim; this is how plain text runs
/// end up between tagged siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: String,
    pub attributes: Attributes,
}

/// A tagged node holding an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// An untagged leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    fn write_html(&self, out: &mut String) -> Result<(), HtmlError> {
        let Some(tag) = &self.tag else {
            out.push_str(&self.value);
            return Ok(());
        };
        check_tag(tag, "leaf")?;
        write_open(out, tag, &self.attributes);
        out.push_str(&self.value);
        write_close(out, tag);
        Ok(())
    }
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Serializes this node and its descendants.
    pub fn to_html(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), HtmlError> {
        check_tag(&self.tag, "parent")?;
        write_open(out, &self.tag, &self.attributes);
        for child in &self.children {
            child.write_html(out)?;
        }
        write_close(out, &self.tag);
        Ok(())
    }
}

impl HtmlNode {
    /// The node's tag, `None` for untagged text leaves.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => Some(&parent.tag),
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    /// Serializes this node and its descendants into a single HTML string.
    pub fn to_html(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), HtmlError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Serializes `node` to an HTML fragment. See [`HtmlNode::to_html`].
pub fn serialize(node: &HtmlNode) -> Result<String, HtmlError> {
    node.to_html()
}

fn write_open(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_to(out);
    out.push('>');
}

fn write_close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// A tag must be a non-empty name that cannot break out of the `<...>` it is
/// written into.
fn check_tag(tag: &str, role: &str) -> Result<(), HtmlError> {
    if tag.is_empty() {
        return Err(HtmlError::MalformedNode {
            reason: format!("{role} node has no tag"),
        });
    }
    if tag
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\'' | '='))
    {
        return Err(HtmlError::MalformedNode {
            reason: format!("{role} node has invalid tag {tag:?}"),
        });
    }
    Ok(())
}
