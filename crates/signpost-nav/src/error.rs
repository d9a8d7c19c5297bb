//! Assembly error types.
//!
//! All assembly failures are static configuration defects discovered at
//! build time. They are fatal to the assembly call (no partial tree is
//! returned) and are never retried or silently recovered: a navigation
//! entry that quietly disappears is worse than a failed build.

/// Error raised while resolving a sidebar specification.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssembleError {
    /// An explicit link names a path with no matching content entry.
    #[error("Sidebar references unknown content path: {path}")]
    UnresolvedReference {
        /// The declared path that failed to resolve.
        path: String,
    },
    /// An autogenerate directive matched no content entries.
    #[error("Autogenerated group matched no content in directory: {directory}")]
    EmptyDirectory {
        /// The directory the directive named.
        directory: String,
    },
    /// An autogenerate directive re-entered a directory already being
    /// expanded on the resolution path.
    #[error("Autogenerate directive re-enters directory under expansion: {directory}")]
    CyclicSpec {
        /// The directory that was re-entered.
        directory: String,
    },
}

/// Error raised while building a [`ContentIndex`](crate::ContentIndex).
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Two content entries share the same path.
    #[error("Duplicate content path: {path}")]
    DuplicatePath {
        /// The path that appeared more than once.
        path: String,
    },
}
