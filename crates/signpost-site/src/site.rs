//! Site facade.
//!
//! [`Site`] wires a content source and a declared sidebar together for one
//! build invocation. There is no caching: every [`Site::navigation`] call
//! scans the source and derives a fresh tree, so a `Site` shared across
//! threads needs no synchronization.

use std::sync::Arc;

use signpost_config::Config;
use signpost_content::{ContentSource, FsSource, SourceError};
use signpost_nav::{
    AssembleError, ContentIndex, IndexError, NavigationTree, SidebarSpec, assemble,
};

/// Error returned when navigation derivation fails.
///
/// All variants are static configuration defects; the caller decides
/// whether to abort the build or fall back to a default tree.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Content discovery failed.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// Scanned entries could not be indexed.
    #[error(transparent)]
    Index(#[from] IndexError),
    /// Sidebar resolution failed.
    #[error(transparent)]
    Assemble(#[from] AssembleError),
}

/// Content source plus declared sidebar for one documentation set.
pub struct Site {
    source: Arc<dyn ContentSource>,
    spec: SidebarSpec,
}

impl Site {
    /// Create a site from a content source and a sidebar specification.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>, spec: SidebarSpec) -> Self {
        Self { source, spec }
    }

    /// Create a site from loaded configuration, backed by the filesystem.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let source = Arc::new(FsSource::new(config.content_resolved.source_dir.clone()));
        Self::new(source, config.sidebar.clone())
    }

    /// The declared sidebar specification.
    #[must_use]
    pub fn spec(&self) -> &SidebarSpec {
        &self.spec
    }

    /// Derive the navigation tree for this site.
    ///
    /// Scans the content source, indexes the entries, and resolves the
    /// sidebar. Each call derives a fresh tree from a fresh scan.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if discovery, indexing, or resolution fails.
    /// No partial tree is returned.
    pub fn navigation(&self) -> Result<NavigationTree, SiteError> {
        let entries = match self.source.scan() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Content scan failed");
                return Err(e.into());
            }
        };
        tracing::debug!(count = entries.len(), "Scanned content entries");

        let index = ContentIndex::from_entries(entries)?;
        let tree = assemble(&self.spec, &index)?;
        tracing::debug!(nodes = tree.len(), "Assembled navigation tree");

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    // Ensure Site is Send + Sync for use with Arc
    static_assertions::assert_impl_all!(super::Site: Send, Sync);

    use std::fs;

    use pretty_assertions::assert_eq;
    use signpost_content::{ContentEntry, MockSource};
    use signpost_nav::{NavNode, SidebarNode};

    use super::*;

    fn mock_site(source: MockSource, nodes: Vec<SidebarNode>) -> Site {
        Site::new(Arc::new(source), SidebarSpec::from_nodes(nodes))
    }

    #[test]
    fn test_navigation_resolves_explicit_link() {
        let site = mock_site(
            MockSource::new().with_page("get-started", "Start"),
            vec![SidebarNode::link("get-started")],
        );

        let tree = site.navigation().unwrap();

        assert_eq!(tree.nodes(), &[NavNode::link("Start", "get-started")]);
    }

    #[test]
    fn test_navigation_resolves_autogenerated_group() {
        let site = mock_site(
            MockSource::new()
                .with_page("about/team", "Team")
                .with_ordered_page("about/mission", "Mission", 1),
            vec![SidebarNode::autogenerated("About", "about")],
        );

        let tree = site.navigation().unwrap();

        assert_eq!(
            tree.nodes(),
            &[NavNode::category(
                "About",
                vec![
                    NavNode::link("Mission", "about/mission"),
                    NavNode::link("Team", "about/team"),
                ]
            )]
        );
    }

    #[test]
    fn test_navigation_propagates_unresolved_reference() {
        let site = mock_site(MockSource::new(), vec![SidebarNode::link("missing")]);

        let err = site.navigation().unwrap_err();

        assert!(matches!(
            err,
            SiteError::Assemble(AssembleError::UnresolvedReference { .. })
        ));
    }

    #[test]
    fn test_navigation_propagates_duplicate_path() {
        let site = mock_site(
            MockSource::new()
                .with_entry(ContentEntry::new("faq", "FAQ"))
                .with_entry(ContentEntry::new("faq", "Other FAQ")),
            vec![SidebarNode::link("faq")],
        );

        let err = site.navigation().unwrap_err();

        assert!(matches!(
            err,
            SiteError::Index(IndexError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn test_navigation_derives_fresh_tree_per_call() {
        let site = mock_site(
            MockSource::new().with_page("faq", "FAQ"),
            vec![SidebarNode::link("faq")],
        );

        let first = site.navigation().unwrap();
        let second = site.navigation().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_from_config_reads_filesystem() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(docs.join("about")).unwrap();
        fs::write(docs.join("get-started.md"), "# Get Started\n").unwrap();
        fs::write(docs.join("about/team.md"), "# Team\n").unwrap();
        fs::write(
            docs.join("about/mission.md"),
            "---\ntitle: Mission\norder: 1\n---\n",
        )
        .unwrap();

        let config_path = temp_dir.path().join("signpost.toml");
        fs::write(
            &config_path,
            r#"
[site]
title = "Example"

sidebar = [
    "get-started",
    { label = "About", autogenerate = { directory = "about" } },
]
"#,
        )
        .unwrap();

        let config = Config::load(Some(config_path.as_path())).unwrap();
        let site = Site::from_config(&config);

        let tree = site.navigation().unwrap();

        assert_eq!(
            tree.nodes(),
            &[
                NavNode::link("Get Started", "get-started"),
                NavNode::category(
                    "About",
                    vec![
                        NavNode::link("Mission", "about/mission"),
                        NavNode::link("Team", "about/team"),
                    ]
                ),
            ]
        );
    }

    #[test]
    fn test_from_config_missing_source_dir_fails_scan() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("signpost.toml");
        fs::write(
            &config_path,
            r#"
[content]
source_dir = "missing-docs"
"#,
        )
        .unwrap();

        let config = Config::load(Some(config_path.as_path())).unwrap();
        let site = Site::from_config(&config);

        let err = site.navigation().unwrap_err();

        assert!(matches!(err, SiteError::Source(_)));
    }

    #[test]
    fn test_concurrent_navigation() {
        use std::thread;

        let site = Arc::new(mock_site(
            MockSource::new().with_page("faq", "FAQ"),
            vec![SidebarNode::link("faq")],
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let site = Arc::clone(&site);
                thread::spawn(move || {
                    let tree = site.navigation().unwrap();
                    assert_eq!(tree.len(), 1);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_spec_accessor() {
        let site = mock_site(MockSource::new(), vec![SidebarNode::link("faq")]);

        assert_eq!(site.spec().nodes(), &[SidebarNode::link("faq")]);
    }
}
