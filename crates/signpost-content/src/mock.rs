//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without filesystem access.

use crate::entry::ContentEntry;
use crate::source::{ContentSource, SourceError};

/// In-memory content source for tests.
///
/// Entries are returned in insertion order. Use the builder methods to
/// configure the mock with test data.
///
/// # Example
///
/// ```
/// use signpost_content::{ContentSource, MockSource};
///
/// let source = MockSource::new()
///     .with_page("get-started", "Get Started")
///     .with_ordered_page("about/team", "Team", 1);
///
/// let entries = source.scan().unwrap();
/// assert_eq!(entries.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    entries: Vec<ContentEntry>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pre-built entry.
    #[must_use]
    pub fn with_entry(mut self, entry: ContentEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add a page with the directory derived from the path.
    #[must_use]
    pub fn with_page(self, path: impl Into<String>, title: impl Into<String>) -> Self {
        self.with_entry(ContentEntry::new(path, title))
    }

    /// Add a page with an explicit navigation order.
    #[must_use]
    pub fn with_ordered_page(
        self,
        path: impl Into<String>,
        title: impl Into<String>,
        order: u32,
    ) -> Self {
        self.with_entry(ContentEntry::new(path, title).with_order(order))
    }
}

impl ContentSource for MockSource {
    fn scan(&self) -> Result<Vec<ContentEntry>, SourceError> {
        Ok(self.entries.clone())
    }
}
