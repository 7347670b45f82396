//! # Inline Parsing
//!
//! Pass-based inline tokenizing over a single block's text.
//!
//! ## Architecture
//!
//! Tokenizing starts from one plain span covering the whole input. Each pass
//! walks the current span list and re-splits only the spans that are still
//! plain, so earlier passes act as raw zones for later ones:
//!
//! 1. `` ` `` code spans
//! 2. `**` bold
//! 3. `*` italic
//! 4. `![alt](url)` images
//! 5. `[text](url)` links
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: delimiter constants and the image/link patterns
//! - **`parser`**: `tokenize()` main entry point with the individual passes
//!
//! ## Precedence
//!
//! `` `**kwargs` `` is a single code span: the bold pass never sees it.
//! Emphasis nested inside another emphasis is not split further.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{SpanKind, TextSpan};
