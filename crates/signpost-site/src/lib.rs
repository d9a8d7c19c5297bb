//! Site facade wiring content discovery and navigation assembly.
//!
//! This crate provides [`Site`], the integration point for one build
//! invocation: scan a [`ContentSource`](signpost_content::ContentSource),
//! index the entries, and resolve the declared sidebar into a
//! [`NavigationTree`](signpost_nav::NavigationTree).
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use signpost_config::Config;
//! use signpost_site::Site;
//!
//! let config = Config::load(Some(Path::new("signpost.toml")))?;
//! let site = Site::from_config(&config);
//!
//! let tree = site.navigation()?;
//! println!("{} top-level entries", tree.len());
//! # Ok(())
//! # }
//! ```

mod site;

pub use site::{Site, SiteError};
