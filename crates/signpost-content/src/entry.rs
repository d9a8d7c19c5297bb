//! Content entry type.

use serde::{Deserialize, Serialize};

/// One unit of documentation content.
///
/// Entries are produced by a [`ContentSource`](crate::ContentSource) scan
/// and consumed as a read-only snapshot by navigation assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Unique slash-delimited identifier (e.g., "get-started", "about/team").
    pub path: String,
    /// Display title.
    pub title: String,
    /// Parent grouping, possibly nested (e.g., "", "about", "guides/admin").
    pub directory: String,
    /// Explicit rank within the directory. Lower comes first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl ContentEntry {
    /// Create an entry with the directory derived from the path.
    ///
    /// The directory is everything before the last `/` in `path`, or `""`
    /// for root-level paths. Use [`with_directory`](Self::with_directory)
    /// when the grouping differs from the path's parent.
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        let path = path.into();
        let directory = path
            .rsplit_once('/')
            .map(|(dir, _)| dir.to_owned())
            .unwrap_or_default();
        Self {
            path,
            title: title.into(),
            directory,
            order: None,
        }
    }

    /// Set the explicit order rank.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Override the directory grouping.
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = directory.into();
        self
    }
}
