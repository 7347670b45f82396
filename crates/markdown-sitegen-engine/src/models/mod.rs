pub mod source_page;

pub use source_page::SourcePage;
