//! # HTML Node Model
//!
//! A deliberately small HTML tree: leaves carry text, parents carry children.
//! The tree is built bottom-up by the block converter and never mutated after.
//!
//! ## Modules
//!
//! - **`attributes`**: `Attributes`, an insertion-ordered key/value list
//! - **`node`**: `HtmlNode`, `LeafNode`, `ParentNode` and the serializer
//! - **`escape`**: optional escaping pass applied between conversion and serialization
//!
//! ## Serialization Rules
//!
//! - Attributes render as ` key="value"` in insertion order
//! - Nothing is escaped by the serializer; use [`escape::escape_tree`] first
//!   when the content is untrusted

pub mod attributes;
pub mod escape;
pub mod node;

pub use attributes::Attributes;
pub use escape::escape_tree;
pub use node::{HtmlNode, LeafNode, ParentNode, serialize};

/// Errors raised while serializing a node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("Malformed node: {reason}")]
    MalformedNode { reason: String },
}
