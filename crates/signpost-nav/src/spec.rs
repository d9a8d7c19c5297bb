//! Declared sidebar specification.
//!
//! A [`SidebarSpec`] is the author-declared shape of the navigation menu:
//! an ordered sequence of nodes, each either a bare content path or a
//! labelled group. Groups hold either manually ordered child nodes or an
//! autogenerate directive naming a content directory.
//!
//! The serde shapes mirror how site configurations declare sidebars, so
//! the same heterogeneous forms parse directly:
//!
//! ```toml
//! sidebar = [
//!     "get-started",
//!     { label = "Premium", autogenerate = { directory = "premium" } },
//!     { label = "Help", items = ["faq", "support"] },
//! ]
//! ```

use serde::Deserialize;

/// The declared navigation shape: an ordered sequence of [`SidebarNode`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SidebarSpec {
    nodes: Vec<SidebarNode>,
}

impl SidebarSpec {
    /// Create a spec from an ordered node sequence.
    #[must_use]
    pub fn from_nodes(nodes: Vec<SidebarNode>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in declared order.
    #[must_use]
    pub fn nodes(&self) -> &[SidebarNode] {
        &self.nodes
    }

    /// Number of top-level nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the spec declares no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One declared sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SidebarNode {
    /// Literal reference to one content path (a bare string in config).
    Link(String),
    /// Labelled group with manual children or an autogenerate directive.
    Group(SidebarGroup),
}

impl SidebarNode {
    /// Create an explicit link node.
    #[must_use]
    pub fn link(path: impl Into<String>) -> Self {
        Self::Link(path.into())
    }

    /// Create a group with manually ordered children.
    #[must_use]
    pub fn group(label: impl Into<String>, items: Vec<SidebarNode>) -> Self {
        Self::Group(SidebarGroup {
            label: label.into(),
            content: GroupContent::Manual { items },
        })
    }

    /// Create a group populated from a content directory.
    #[must_use]
    pub fn autogenerated(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self::Group(SidebarGroup {
            label: label.into(),
            content: GroupContent::Autogenerate {
                autogenerate: AutogenerateDirective {
                    directory: directory.into(),
                },
            },
        })
    }
}

/// A labelled navigation group.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarGroup {
    /// Display label for the group.
    pub label: String,
    /// Manual children or autogenerate directive.
    #[serde(flatten)]
    pub content: GroupContent,
}

/// How a group's children are determined.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GroupContent {
    /// Manually ordered child nodes.
    Manual {
        /// Children in declared order.
        items: Vec<SidebarNode>,
    },
    /// Children computed from a content directory.
    Autogenerate {
        /// The directive naming the directory.
        autogenerate: AutogenerateDirective,
    },
}

/// Instruction to populate a group from all content under one directory.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AutogenerateDirective {
    /// Directory whose entries become the group's children (exact match,
    /// non-recursive).
    pub directory: String,
}
