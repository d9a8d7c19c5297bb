//! Filesystem content discovery.
//!
//! [`FsSource`] walks a docs directory and builds one [`ContentEntry`] per
//! markdown file:
//! - hidden (`.`) and underscore-prefixed names are skipped
//! - `dir/index.md` becomes the section landing page at path `dir`
//! - titles resolve as frontmatter > first `# ` heading > title-cased stem
//!
//! The scan result is sorted by path, so discovery order never depends on
//! filesystem iteration order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::ContentEntry;
use crate::frontmatter::{Frontmatter, extract_frontmatter};
use crate::source::{ContentSource, SourceError};

/// Content source backed by a filesystem directory.
pub struct FsSource {
    source_dir: PathBuf,
}

impl FsSource {
    /// Create a filesystem source rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan a directory level and recurse into subdirectories.
    ///
    /// `dir_path` is the slash-delimited content path of this level
    /// (`""` at the root).
    fn scan_directory(&self, dir: &Path, dir_path: &str, out: &mut Vec<ContentEntry>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "Failed to read directory during scan");
                return;
            }
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            let path = entry.path();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                let child_path = if dir_path.is_empty() {
                    name
                } else {
                    format!("{dir_path}/{name}")
                };
                self.scan_directory(&path, &child_path, out);
            } else if name.ends_with(".md")
                && let Some(content_entry) = build_entry(&path, &name, dir_path)
            {
                out.push(content_entry);
            }
        }
    }
}

impl ContentSource for FsSource {
    fn scan(&self) -> Result<Vec<ContentEntry>, SourceError> {
        if !self.source_dir.is_dir() {
            return Err(SourceError::not_found(self.source_dir.clone()).with_backend("Fs"));
        }

        let mut entries = Vec::new();
        self.scan_directory(&self.source_dir, "", &mut entries);
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}

/// Build a [`ContentEntry`] for one markdown file.
///
/// Returns `None` if the file cannot be read; a malformed frontmatter
/// block is logged and the page falls back to heading extraction.
fn build_entry(file: &Path, name: &str, dir_path: &str) -> Option<ContentEntry> {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %file.display(), error = %e, "Skipping unreadable content file");
            return None;
        }
    };

    let (front, body) = match extract_frontmatter(&content) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::warn!(path = %file.display(), error = %e, "Ignoring malformed frontmatter");
            (None, content.as_str())
        }
    };
    let front = front.unwrap_or_default();

    let stem = name.strip_suffix(".md").unwrap_or(name);
    let (content_path, directory, fallback_stem) = if stem == "index" {
        // dir/index.md is the section landing page at the directory's path
        let parent = dir_path.rsplit_once('/').map_or("", |(parent, _)| parent);
        let section = dir_path.rsplit('/').next().filter(|s| !s.is_empty());
        (
            dir_path.to_owned(),
            parent.to_owned(),
            section.unwrap_or(stem).to_owned(),
        )
    } else if dir_path.is_empty() {
        (stem.to_owned(), String::new(), stem.to_owned())
    } else {
        (
            format!("{dir_path}/{stem}"),
            dir_path.to_owned(),
            stem.to_owned(),
        )
    };

    let title = resolve_title(&front, body, &fallback_stem);

    Some(ContentEntry {
        path: content_path,
        title,
        directory,
        order: front.order,
    })
}

/// Resolve a page title: frontmatter > first `# ` heading > stem.
fn resolve_title(front: &Frontmatter, body: &str, stem: &str) -> String {
    front
        .title
        .clone()
        .or_else(|| first_heading(body).map(ToOwned::to_owned))
        .unwrap_or_else(|| title_from_stem(stem))
}

/// Find the first level-one heading in markdown text.
fn first_heading(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|title| !title.is_empty())
}

/// Title-case a file stem: "getting-started" -> "Getting Started".
fn title_from_stem(stem: &str) -> String {
    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
