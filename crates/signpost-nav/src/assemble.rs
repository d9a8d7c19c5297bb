//! Sidebar resolution.
//!
//! [`assemble`] walks the declared spec in order, resolving each node
//! against the content index:
//! - explicit links are looked up by path
//! - manual groups recurse into their children in declared order
//! - autogenerated groups partition the index by exact directory match
//!   and sort the members
//!
//! Output ordering mirrors the spec's declared sequence exactly; only the
//! contents of autogenerated groups are computed, never their position.
//! The sort for autogenerated members is: explicit order first (lower
//! ranks before higher, ranked entries before unranked), then title,
//! then discovery order, with path comparison as the final tie-break.

use std::cmp::Ordering;
use std::collections::HashSet;

use signpost_content::ContentEntry;

use crate::error::AssembleError;
use crate::index::ContentIndex;
use crate::spec::{GroupContent, SidebarNode, SidebarSpec};
use crate::tree::{NavNode, NavigationTree};

/// Resolve a sidebar specification against a content index.
///
/// Pure and deterministic: two calls with identical inputs produce
/// structurally identical trees. Logging unresolved references is the
/// caller's responsibility.
///
/// # Errors
///
/// - [`AssembleError::UnresolvedReference`] if an explicit link names a
///   path absent from the index.
/// - [`AssembleError::EmptyDirectory`] if an autogenerate directive
///   matches no entries. An empty autogenerated section signals a likely
///   misconfiguration and must not silently render an empty category.
/// - [`AssembleError::CyclicSpec`] if a directive re-enters a directory
///   already being expanded.
///
/// No partial tree is returned on failure.
pub fn assemble(
    spec: &SidebarSpec,
    index: &ContentIndex,
) -> Result<NavigationTree, AssembleError> {
    let mut expanding = Vec::new();
    let nodes = resolve_nodes(spec.nodes(), index, &mut expanding)?;
    Ok(NavigationTree::from_nodes(nodes))
}

/// Resolve one level of spec nodes in declared order.
///
/// Duplicate link paths within the level resolve idempotently: the first
/// occurrence is kept and later ones are dropped.
fn resolve_nodes(
    nodes: &[SidebarNode],
    index: &ContentIndex,
    expanding: &mut Vec<String>,
) -> Result<Vec<NavNode>, AssembleError> {
    let mut resolved = Vec::with_capacity(nodes.len());
    let mut seen_paths: HashSet<String> = HashSet::new();

    for node in nodes {
        match node {
            SidebarNode::Link(path) => {
                let entry =
                    index
                        .get(path)
                        .ok_or_else(|| AssembleError::UnresolvedReference {
                            path: path.clone(),
                        })?;
                if seen_paths.insert(entry.path.clone()) {
                    resolved.push(NavNode::link(entry.title.clone(), entry.path.clone()));
                }
            }
            SidebarNode::Group(group) => {
                let children = match &group.content {
                    GroupContent::Manual { items } => resolve_nodes(items, index, expanding)?,
                    GroupContent::Autogenerate { autogenerate } => {
                        expand_directory(&autogenerate.directory, index, expanding)?
                    }
                };
                resolved.push(NavNode::category(group.label.clone(), children));
            }
        }
    }

    Ok(resolved)
}

/// Expand an autogenerate directive into sorted link children.
fn expand_directory(
    directory: &str,
    index: &ContentIndex,
    expanding: &mut Vec<String>,
) -> Result<Vec<NavNode>, AssembleError> {
    if expanding.iter().any(|d| d == directory) {
        return Err(AssembleError::CyclicSpec {
            directory: directory.to_owned(),
        });
    }
    expanding.push(directory.to_owned());

    // Exact directory match only: resolution is non-recursive, so entries
    // in subdirectories of `directory` are not members.
    let mut members: Vec<(usize, &ContentEntry)> = index
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.directory == directory)
        .collect();

    let result = if members.is_empty() {
        Err(AssembleError::EmptyDirectory {
            directory: directory.to_owned(),
        })
    } else {
        members.sort_by(|(a_idx, a), (b_idx, b)| {
            compare_entries(a, b)
                .then(a_idx.cmp(b_idx))
                .then_with(|| a.path.cmp(&b.path))
        });
        Ok(members
            .into_iter()
            .map(|(_, entry)| NavNode::link(entry.title.clone(), entry.path.clone()))
            .collect())
    };

    expanding.pop();
    result
}

/// Compare two directory members for autogenerated ordering.
///
/// Entries carrying an explicit order precede entries without one and
/// compare by rank; unranked entries compare by title.
fn compare_entries(a: &ContentEntry, b: &ContentEntry) -> Ordering {
    match (a.order, b.order) {
        (Some(a_rank), Some(b_rank)) => a_rank.cmp(&b_rank),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}
