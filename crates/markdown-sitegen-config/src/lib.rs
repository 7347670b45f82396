use markdown_sitegen_engine::{DEFAULT_MAX_QUOTE_DEPTH, DEFAULT_ROOT_TAG, PageSettings, RenderOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "sitegen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where a site build reads from and writes to, plus render knobs.
///
/// Every field is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template_path: PathBuf,
    pub root_tag: String,
    pub max_quote_depth: usize,
    pub escape_html: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            static_dir: PathBuf::from("./static"),
            public_dir: PathBuf::from("./public"),
            template_path: PathBuf::from("./template.html"),
            root_tag: DEFAULT_ROOT_TAG.to_string(),
            max_quote_depth: DEFAULT_MAX_QUOTE_DEPTH,
            escape_html: false,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in every configured path
        for path in [
            &mut config.content_dir,
            &mut config.static_dir,
            &mut config.public_dir,
            &mut config.template_path,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_quote_depth: self.max_quote_depth,
            escape_html: self.escape_html,
        }
    }

    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            root_tag: self.root_tag.clone(),
            render: self.render_options(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path_is_local_file() {
        assert_eq!(Config::config_path(), PathBuf::from("sitegen.toml"));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.root_tag, "div");
        assert_eq!(config.max_quote_depth, 32);
        assert!(!config.escape_html);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
public_dir = "./docs"
escape_html = true
"#,
        )
        .unwrap();

        assert_eq!(config.public_dir, PathBuf::from("./docs"));
        assert!(config.escape_html);
        assert_eq!(config.content_dir, PathBuf::from("./content"));
        assert_eq!(config.template_path, PathBuf::from("./template.html"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            content_dir: PathBuf::from("/tmp/site/content"),
            root_tag: "main".to_string(),
            max_quote_depth: 4,
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("SITEGEN_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$SITEGEN_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("SITEGEN_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("sitegen.toml");
        std::fs::write(&config_file, "max_quote_depth = \"deep\"").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("sitegen.toml");
        let test_config = Config {
            public_dir: PathBuf::from("/tmp/public"),
            escape_html: true,
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_load_expands_env_vars_in_paths() {
        unsafe {
            env::set_var("SITEGEN_TEST_ROOT", "/custom/site");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("sitegen.toml");
        std::fs::write(
            &config_file,
            "content_dir = \"$SITEGEN_TEST_ROOT/content\"\ntemplate_path = \"$SITEGEN_TEST_ROOT/t.html\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.content_dir, PathBuf::from("/custom/site/content"));
        assert_eq!(config.template_path, PathBuf::from("/custom/site/t.html"));

        unsafe {
            env::remove_var("SITEGEN_TEST_ROOT");
        }
    }

    #[test]
    fn test_page_settings_follow_config() {
        let config = Config {
            root_tag: "article".to_string(),
            max_quote_depth: 3,
            escape_html: true,
            ..Config::default()
        };

        let settings = config.page_settings();

        assert_eq!(settings.root_tag, "article");
        assert_eq!(settings.render.max_quote_depth, 3);
        assert!(settings.render.escape_html);
    }
}
