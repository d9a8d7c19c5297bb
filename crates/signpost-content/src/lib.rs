//! Content model and discovery for Signpost.
//!
//! This crate provides:
//! - [`ContentEntry`]: one documentation page with path, title, directory
//!   grouping and optional explicit ordering
//! - [`ContentSource`]: trait abstracting content discovery backends
//! - [`FsSource`]: filesystem implementation scanning a docs directory
//! - `MockSource`: in-memory test double (behind the `mock` feature)
//!
//! # Path Convention
//!
//! All content paths are slash-delimited identifiers relative to the
//! content root, without extension:
//! - `"get-started"` - standalone page at the root
//! - `"about"` - section landing page (`about/index.md`)
//! - `"about/team"` - nested page
//!
//! A page's `directory` is the slash-delimited parent grouping (`""` for
//! the root), which directory-driven navigation groups partition on.

mod entry;
mod frontmatter;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use entry::ContentEntry;
pub use frontmatter::{Frontmatter, FrontmatterError, extract_frontmatter};
pub use fs::FsSource;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use source::{ContentSource, SourceError, SourceErrorKind};
