//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. The configuration names the
//! site-wide parameters and the logical pages to render; it is read once at
//! startup and shared read-only across the whole run.
//!
//! ## Configuration Options
//!
//! ```toml
//! [base]
//! author = "Jane Doe"       # Site author, shown in page metadata and footer
//! content = "content"       # Content root; page content lives in <content>/<file>/
//! output = "site"           # Output root for generated pages
//!
//! [[pages]]
//! file = "home"             # Output base name, also the content subfolder name
//! name = "home"             # Navigation identity and link label
//! title = "Welcome"         # Page title
//! content_type = "default"  # "default" or "article"
//! nav = ["main"]            # Navigation areas: "main", "footer"
//!
//! [[pages]]
//! file = "blog"
//! name = "blog"
//! title = "Blog"
//! content_type = "article"  # Renders an index page plus one detail page per entry
//! nav = ["main", "footer"]
//!
//! [social_media]            # Optional platform -> profile URL links
//! fediverse = "https://example.social/@jane"
//! github = "https://github.com/jane"
//! ```
//!
//! Unknown keys are rejected to catch typos early. `file` and `name` must be
//! unique across pages; duplicates would silently overwrite each other's
//! output or make the active-navigation flag ambiguous.

use crate::nav::NavPlacement;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// Read-only for the lifetime of a render run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site-wide parameters.
    pub base: BaseConfig,
    /// Logical pages to render, in navigation/configuration order.
    pub pages: Vec<PageSpec>,
    /// Platform name to profile URL, rendered as social links.
    pub social_media: BTreeMap<String, String>,
}

/// Site-wide parameters from the `[base]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaseConfig {
    /// Site author, shown in page metadata and the footer.
    pub author: String,
    /// Content root directory; page content lives in `<content>/<file>/`.
    pub content: PathBuf,
    /// Output root directory for generated pages.
    pub output: PathBuf,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            content: PathBuf::from("content"),
            output: PathBuf::from("site"),
        }
    }
}

/// One configured logical page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    /// Output base name (`<file>.html`), also the content subfolder name.
    pub file: String,
    /// Navigation identity; unique across pages.
    pub name: String,
    /// Page title.
    pub title: String,
    /// How content records are turned into output pages.
    #[serde(default)]
    pub content_type: ContentType,
    /// Navigation areas this page appears in. Empty = not in navigation.
    #[serde(default)]
    pub nav: Vec<NavPlacement>,
}

/// How a page's content records are rendered.
///
/// A closed enum: an unrecognized value in `config.toml` is a hard
/// deserialization failure, never a silent fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// One aggregate page listing the full body of every record.
    #[default]
    Default,
    /// An aggregate index of previews plus one detail page per record.
    Article,
}

impl SiteConfig {
    /// Validate cross-page invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut files = HashSet::new();
        let mut names = HashSet::new();
        for page in &self.pages {
            if page.file.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "page '{}' has an empty file name",
                    page.name
                )));
            }
            if !files.insert(page.file.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page file: {}",
                    page.file
                )));
            }
            if !names.insert(page.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page name: {}",
                    page.name
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate the configuration file at `path`.
///
/// A missing file is fatal: nothing can be rendered without a page list.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FULL: &str = r#"
[base]
author = "Jane Doe"
content = "content"
output = "site"

[[pages]]
file = "home"
name = "home"
title = "Welcome"
content_type = "default"
nav = ["main"]

[[pages]]
file = "blog"
name = "blog"
title = "Blog"
content_type = "article"
nav = ["main", "footer"]

[social_media]
github = "https://github.com/jane"
"#;

    #[test]
    fn full_config_parses() {
        let config: SiteConfig = toml::from_str(FULL).unwrap();

        assert_eq!(config.base.author, "Jane Doe");
        assert_eq!(config.pages.len(), 2);
        assert_eq!(config.pages[1].content_type, ContentType::Article);
        assert_eq!(
            config.pages[1].nav,
            vec![NavPlacement::Main, NavPlacement::Footer]
        );
        assert_eq!(
            config.social_media.get("github").map(String::as_str),
            Some("https://github.com/jane")
        );
    }

    #[test]
    fn sparse_config_uses_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
[base]
author = "Jane"
"#,
        )
        .unwrap();

        assert_eq!(config.base.content, PathBuf::from("content"));
        assert_eq!(config.base.output, PathBuf::from("site"));
        assert!(config.pages.is_empty());
        assert!(config.social_media.is_empty());
    }

    #[test]
    fn page_defaults_to_default_content_type() {
        let config: SiteConfig = toml::from_str(
            r#"
[[pages]]
file = "home"
name = "home"
title = "Home"
"#,
        )
        .unwrap();

        assert_eq!(config.pages[0].content_type, ContentType::Default);
        assert!(config.pages[0].nav.is_empty());
    }

    #[test]
    fn unknown_content_type_is_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[[pages]]
file = "home"
name = "home"
title = "Home"
content_type = "gallery"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("authr = \"typo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_page_file_fails_validation() {
        let config: SiteConfig = toml::from_str(
            r#"
[[pages]]
file = "home"
name = "home"
title = "Home"

[[pages]]
file = "home"
name = "other"
title = "Other"
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("duplicate page file")
        ));
    }

    #[test]
    fn duplicate_page_name_fails_validation() {
        let config: SiteConfig = toml::from_str(
            r#"
[[pages]]
file = "home"
name = "home"
title = "Home"

[[pages]]
file = "other"
name = "home"
title = "Other"
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("duplicate page name")
        ));
    }

    #[test]
    fn empty_page_file_fails_validation() {
        let config: SiteConfig = toml::from_str(
            r#"
[[pages]]
file = ""
name = "home"
title = "Home"
"#,
        )
        .unwrap();

        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_config_reads_and_validates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, FULL).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.pages.len(), 2);
    }

    #[test]
    fn missing_config_is_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "base = [unclosed").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }
}
