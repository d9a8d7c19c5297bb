//! Configuration management for Signpost.
//!
//! Parses `signpost.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The configuration carries three concerns:
//! - `[site]` - passthrough site metadata (title, url, social links) for
//!   the rendering collaborator; carried, never interpreted here
//! - `[content]` - where the content tree lives
//! - `sidebar` - the declared navigation shape, in the same heterogeneous
//!   forms site generators use (bare path strings, labelled groups with
//!   `items`, labelled groups with `autogenerate.directory`)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use signpost_nav::{GroupContent, SidebarNode, SidebarSpec};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "signpost.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata passed through to the renderer.
    pub site: SiteMeta,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Declared sidebar specification.
    pub sidebar: SidebarSpec,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata for the rendering collaborator.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Site title.
    pub title: String,
    /// Canonical site URL.
    pub url: Option<String>,
    /// Social links rendered by the site chrome.
    pub social: Vec<SocialLink>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            url: None,
            social: Vec::new(),
        }
    }
}

/// One social link (label + URL).
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    /// Display label (e.g., "GitHub").
    pub label: String,
    /// Link target.
    pub url: String,
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Source directory for content files.
    pub source_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `signpost.toml` in the current directory and parents,
    /// falling back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default_with_cwd())
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteMeta::default(),
            content: ContentConfigRaw::default(),
            sidebar: SidebarSpec::default(),
            content_resolved: ContentConfig {
                source_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.content_resolved = ContentConfig {
            source_dir: config_dir.join(self.content.source_dir.as_deref().unwrap_or("docs")),
        };
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        if let Some(ref url) = self.site.url {
            require_http_url(url, "site.url")?;
        }
        for link in &self.site.social {
            require_non_empty(&link.label, "site.social label")?;
            require_http_url(&link.url, "site.social url")?;
        }
        validate_sidebar_nodes(self.sidebar.nodes())
    }
}

/// Validate declared sidebar nodes recursively.
fn validate_sidebar_nodes(nodes: &[SidebarNode]) -> Result<(), ConfigError> {
    for node in nodes {
        match node {
            SidebarNode::Link(path) => require_non_empty(path, "sidebar link path")?,
            SidebarNode::Group(group) => {
                require_non_empty(&group.label, "sidebar group label")?;
                match &group.content {
                    GroupContent::Manual { items } => validate_sidebar_nodes(items)?,
                    GroupContent::Autogenerate { autogenerate } => {
                        require_non_empty(
                            &autogenerate.directory,
                            "sidebar autogenerate directory",
                        )?;
                    }
                }
            }
        }
    }
    Ok(())
}
