use std::sync::OnceLock;

use regex::Regex;

/// Image inline type: `![alt](url)`.
pub struct Image;

/// Link inline type: `[text](url)`.
pub struct Link;

impl Image {
    /// Non-greedy `![alt](url)` pattern.
    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
    }

    /// All `(alt, url)` pairs in `text`, left to right.
    pub fn extract(text: &str) -> Vec<(&str, &str)> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
            .collect()
    }

    /// The literal markdown for an extracted pair.
    pub fn markdown(alt: &str, url: &str) -> String {
        format!("![{alt}]({url})")
    }
}

impl Link {
    /// Non-greedy `[text](url)` pattern with the optional `!` captured so that
    /// image syntax can be filtered out (the regex crate has no lookbehind).
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX
            .get_or_init(|| Regex::new(r"(!?)\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }

    /// All `(text, url)` pairs in `text`, left to right, skipping images.
    pub fn extract(text: &str) -> Vec<(&str, &str)> {
        Self::pattern()
            .captures_iter(text)
            .filter(|c| c.get(1).is_none_or(|bang| bang.as_str().is_empty()))
            .filter_map(|c| Some((c.get(2)?.as_str(), c.get(3)?.as_str())))
            .collect()
    }

    pub fn markdown(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }
}
