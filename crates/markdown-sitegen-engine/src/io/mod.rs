use crate::models::SourcePage;
use crate::render::{RenderError, RenderOptions, render_fragment};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";
pub const DEFAULT_ROOT_TAG: &str = "div";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Failed to generate page from {path}: {source}")]
    Page { path: PathBuf, source: PageError },
}

/// Why a single page could not be produced from its markdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("no title found, expected a line starting with \"# \"")]
    NoTitleFound,
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// How pages are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    /// Tag wrapping the rendered blocks.
    pub root_tag: String,
    pub render: RenderOptions,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            root_tag: DEFAULT_ROOT_TAG.to_string(),
            render: RenderOptions::default(),
        }
    }
}

/// The text after the first line starting with `"# "`.
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim_end)
}

/// Renders markdown into the template's title and content placeholders.
pub fn render_page(
    markdown: &str,
    template: &str,
    settings: &PageSettings,
) -> Result<String, PageError> {
    let content = render_fragment(markdown, &settings.root_tag, &settings.render)?;
    let title = extract_title(markdown).ok_or(PageError::NoTitleFound)?;

    Ok(template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Generate one page from a markdown file and a template file
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    settings: &PageSettings,
) -> Result<(), IoError> {
    let template = read_file(template_path)?;
    write_page(from_path, &template, dest_path, settings)
}

/// Generate a page for every markdown file under `content_dir`, mirroring the
/// directory structure into `dest_dir`. Returns the written pages, sorted.
///
/// The first page that fails stops the run.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    settings: &PageSettings,
) -> Result<Vec<PathBuf>, IoError> {
    let template = read_file(template_path)?;
    let mut written = Vec::new();

    for from_path in scan_markdown_files(content_dir)? {
        let relative = from_path
            .strip_prefix(content_dir)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok())
            .ok_or_else(|| {
                IoError::InvalidContentDir(format!(
                    "{} is not inside {}",
                    from_path.display(),
                    content_dir.display()
                ))
            })?;
        let page = SourcePage::new(relative);
        log::debug!("{} maps to {}", page.relative_path(), page.output_path());
        let dest_path = page.output_path().to_path(dest_dir);

        write_page(&from_path, &template, &dest_path, settings)?;
        written.push(dest_path);
    }

    Ok(written)
}

/// Scan for markdown files in the content directory
pub fn scan_markdown_files(content_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_dir)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_dir, &mut files)?;
    files.sort();
    Ok(files)
}

/// Copy every file under `src` into `dest`, keeping the directory layout.
/// Returns the number of files copied.
pub fn copy_static_recursive(src: &Path, dest: &Path) -> Result<usize, IoError> {
    if !src.is_dir() {
        return Err(IoError::NotFound(src.to_path_buf()));
    }
    fs::create_dir_all(dest).map_err(IoError::Io)?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copied += copy_static_recursive(&from, &to)?;
        } else {
            log::debug!(" * {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(IoError::Io)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Remove a generated directory. Returns whether anything was removed.
pub fn clean_dir(path: &Path) -> Result<bool, IoError> {
    if !path.exists() {
        return Ok(false);
    }
    log::warn!("Deleting {}", path.display());
    fs::remove_dir_all(path).map_err(IoError::Io)?;
    Ok(true)
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}

fn write_page(
    from_path: &Path,
    template: &str,
    dest_path: &Path,
    settings: &PageSettings,
) -> Result<(), IoError> {
    log::info!(" * {} -> {}", from_path.display(), dest_path.display());

    let markdown = read_file(from_path)?;
    let page = render_page(&markdown, template, settings).map_err(|source| IoError::Page {
        path: from_path.to_path_buf(),
        source,
    })?;

    write_file(dest_path, &page)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if SourcePage::is_source(&path) {
            files.push(path);
        }
    }

    Ok(())
}
