//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Delimiter`**: paired markers (`` ` ``, `**`, `*`) and the span kind they produce
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern, never preceded by `!`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `](`.

pub mod delimiter;
pub mod link;

pub use delimiter::Delimiter;
pub use link::{Image, Link};
