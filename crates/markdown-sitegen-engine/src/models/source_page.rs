use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

/// A markdown source inside the content tree and the page it produces.
///
/// Both paths are relative: the source to the content root, the output to
/// the public root. The output mirrors the source with an `.html` extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePage {
    relative_path: RelativePathBuf,
    output_path: RelativePathBuf,
}

impl SourcePage {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    /// Create a new SourcePage from a path relative to the content root
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let output_path = relative_path.with_extension(Self::OUTPUT_EXTENSION);
        Self {
            relative_path,
            output_path,
        }
    }

    /// Get the source path, relative to the content root
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the page path, relative to the public root
    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }

    /// Whether `path` names a markdown source (`.md`, any case)
    pub fn is_source(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(Self::SOURCE_EXTENSION))
    }
}

impl From<RelativePathBuf> for SourcePage {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for SourcePage {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
