//! # Block Parsing
//!
//! Two-phase block parsing over whole blank-line separated chunks.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is cut into `Block`s on blank
//!    lines; each block is trimmed and borrows from the source text
//!
//! 2. **Classification** (`classify`): `MarkdownBlockClassifier` assigns each
//!    block exactly one `BlockType` by ordered predicate matching
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockType`, `BlockNode`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, BlockQuote, lists, Paragraph)
//! - **`segment`**: `BlockSegmenter` line-at-a-time state machine and `segment()`
//! - **`classify`**: `MarkdownBlockClassifier` produces a `BlockType` per block
//!
//! ## Key Invariants
//!
//! - A block's type depends only on its own text
//! - An empty fenced code block is a paragraph
//! - List markers must be uniform across the block; ordered lists count from 1 without gaps

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::MarkdownBlockClassifier;
pub use segment::{BlockSegmenter, segment};
pub use types::{Block, BlockNode, BlockType};
