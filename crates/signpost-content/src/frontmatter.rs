//! Frontmatter extraction for content files.
//!
//! Content files may open with a YAML block fenced by `---` lines carrying
//! the page title and an optional navigation order. Unknown fields are
//! ignored so authors can keep renderer-specific metadata in the same
//! block.

use serde::Deserialize;

/// Parsed frontmatter fields relevant to navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    /// Display title. Overrides heading extraction when present.
    #[serde(default)]
    pub title: Option<String>,
    /// Navigation order within the page's directory. Lower comes first.
    #[serde(default)]
    pub order: Option<u32>,
}

/// Error type for frontmatter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// Opening `---` fence without a closing one.
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,
    /// Fenced block is not valid YAML.
    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

/// Extract frontmatter from content file text.
///
/// Returns the parsed frontmatter (if a block is present) and the
/// remaining body after the block.
///
/// # Errors
///
/// Returns [`FrontmatterError`] if the fence is unclosed or the block is
/// not valid YAML.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    // An empty fenced block is a valid no-op, not a YAML document
    let frontmatter: Frontmatter = if yaml_content.is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml_content)
            .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?
    };

    Ok((Some(frontmatter), remaining.trim_start()))
}
