//! Content index snapshot.
//!
//! [`ContentIndex`] holds the content entries for one assembly invocation
//! in a flat insertion-ordered `Vec` with a `HashMap` path index. This
//! gives O(1) path lookups while preserving discovery order, which the
//! ordering rule for autogenerated groups depends on.

use std::collections::HashMap;

use signpost_content::ContentEntry;

use crate::error::IndexError;

/// Read-only snapshot mapping content path to [`ContentEntry`].
#[derive(Clone, Debug, Default)]
pub struct ContentIndex {
    entries: Vec<ContentEntry>,
    path_index: HashMap<String, usize>,
}

impl ContentIndex {
    /// Build an index from scanned entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::DuplicatePath`] if two entries share a path.
    /// A content set with two pages at one path is a broken content tree,
    /// not something to resolve silently.
    pub fn from_entries(entries: Vec<ContentEntry>) -> Result<Self, IndexError> {
        let mut path_index = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if path_index.insert(entry.path.clone(), idx).is_some() {
                return Err(IndexError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }
        }
        Ok(Self {
            entries,
            path_index,
        })
    }

    /// Look up an entry by content path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ContentEntry> {
        self.path_index.get(path).map(|&idx| &self.entries[idx])
    }

    /// All entries in discovery order.
    #[must_use]
    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_indexes_paths() {
        let index = ContentIndex::from_entries(vec![
            ContentEntry::new("get-started", "Start"),
            ContentEntry::new("about/team", "Team"),
        ])
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("get-started").unwrap().title, "Start");
        assert_eq!(index.get("about/team").unwrap().directory, "about");
    }

    #[test]
    fn test_get_unknown_path_returns_none() {
        let index = ContentIndex::from_entries(vec![ContentEntry::new("a", "A")]).unwrap();

        assert!(index.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let result = ContentIndex::from_entries(vec![
            ContentEntry::new("about/team", "Team"),
            ContentEntry::new("about/team", "Other Team"),
        ]);

        assert_eq!(
            result.unwrap_err(),
            IndexError::DuplicatePath {
                path: "about/team".to_owned()
            }
        );
    }

    #[test]
    fn test_entries_preserve_insertion_order() {
        let index = ContentIndex::from_entries(vec![
            ContentEntry::new("b", "B"),
            ContentEntry::new("a", "A"),
        ])
        .unwrap();

        let paths: Vec<_> = index.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_index() {
        let index = ContentIndex::from_entries(Vec::new()).unwrap();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
