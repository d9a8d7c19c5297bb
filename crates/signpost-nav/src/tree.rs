//! Resolved navigation tree.
//!
//! The output of assembly: an ordered sequence of nodes mirroring the
//! declared sidebar, with every directive resolved to concrete links.
//! Serializes to JSON for the rendering collaborator.

use serde::Serialize;

/// Fully resolved navigation structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree {
    nodes: Vec<NavNode>,
}

impl NavigationTree {
    /// Create a tree from resolved nodes.
    #[must_use]
    pub fn from_nodes(nodes: Vec<NavNode>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in resolved order.
    #[must_use]
    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Number of top-level nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One resolved navigation node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Leaf link to one content page.
    Link {
        /// Display title.
        title: String,
        /// Content path, exactly as declared.
        path: String,
    },
    /// Labelled category of child nodes.
    Category {
        /// Display label.
        label: String,
        /// Resolved children.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<NavNode>,
    },
}

impl NavNode {
    /// Create a link node.
    #[must_use]
    pub fn link(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Link {
            title: title.into(),
            path: path.into(),
        }
    }

    /// Create a category node.
    #[must_use]
    pub fn category(label: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self::Category {
            label: label.into(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_serialization() {
        let node = NavNode::link("Get Started", "get-started");

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["title"], "Get Started");
        assert_eq!(json["path"], "get-started");
    }

    #[test]
    fn test_category_serialization_with_children() {
        let node = NavNode::category("About", vec![NavNode::link("Team", "about/team")]);

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["label"], "About");
        assert!(json["children"].is_array());
        assert_eq!(json["children"][0]["path"], "about/team");
    }

    #[test]
    fn test_category_serialization_skips_empty_children() {
        let node = NavNode::category("Empty", Vec::new());

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["label"], "Empty");
        assert!(json.get("children").is_none()); // Skipped when empty
    }

    #[test]
    fn test_tree_serializes_as_sequence() {
        let tree = NavigationTree::from_nodes(vec![
            NavNode::link("Start", "get-started"),
            NavNode::category("About", vec![NavNode::link("Team", "about/team")]),
        ]);

        let json = serde_json::to_value(&tree).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["path"], "get-started");
        assert_eq!(json[1]["label"], "About");
    }

    #[test]
    fn test_empty_tree() {
        let tree = NavigationTree::default();

        assert!(tree.is_empty());
        assert_eq!(serde_json::to_string(&tree).unwrap(), "[]");
    }
}
