//! Navigation assembly for Signpost.
//!
//! This crate resolves a declared [`SidebarSpec`] against a read-only
//! [`ContentIndex`], producing one ordered, deduplicated
//! [`NavigationTree`] for a renderer to consume.
//!
//! Assembly is a pure function of its two inputs: no I/O, no logging, no
//! shared state. Re-running it on unchanged inputs yields structurally
//! identical output.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use signpost_content::ContentEntry;
//! use signpost_nav::{ContentIndex, SidebarNode, SidebarSpec, assemble};
//!
//! let index = ContentIndex::from_entries(vec![
//!     ContentEntry::new("get-started", "Get Started"),
//!     ContentEntry::new("about/team", "Team"),
//!     ContentEntry::new("about/mission", "Mission"),
//! ])?;
//!
//! let spec = SidebarSpec::from_nodes(vec![
//!     SidebarNode::link("get-started"),
//!     SidebarNode::autogenerated("About", "about"),
//! ]);
//!
//! let tree = assemble(&spec, &index)?;
//! assert_eq!(tree.len(), 2);
//! # Ok(())
//! # }
//! ```

mod assemble;
mod error;
mod index;
mod spec;
mod tree;

pub use assemble::assemble;
pub use error::{AssembleError, IndexError};
pub use index::ContentIndex;
pub use spec::{AutogenerateDirective, GroupContent, SidebarGroup, SidebarNode, SidebarSpec};
pub use tree::{NavNode, NavigationTree};
