//! Content source trait and error types.
//!
//! Provides the [`ContentSource`] trait for abstracting content discovery,
//! along with [`SourceError`] for unified error handling across backends.
//!
//! Discovery failures are static configuration defects surfaced at build
//! time, never transient conditions; no retry guidance is carried.

use std::path::PathBuf;

use crate::entry::ContentEntry;

/// Semantic error categories for content discovery.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Discovery error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct SourceError {
    /// Semantic error category.
    pub kind: SourceErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Create a new source error.
    #[must_use]
    pub fn new(kind: SourceErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(SourceErrorKind::NotFound).with_path(path)
    }

    /// Create a source error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => SourceErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => SourceErrorKind::PermissionDenied,
            _ => SourceErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            SourceErrorKind::NotFound => "Not found",
            SourceErrorKind::PermissionDenied => "Permission denied",
            SourceErrorKind::InvalidPath => "Invalid path",
            SourceErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Content discovery abstraction.
///
/// Implementations supply the full set of content entries for one build
/// invocation. The returned listing is a snapshot: navigation assembly
/// never reads through the source again, so backends are free to walk a
/// filesystem, query an API, or serve fixtures from memory.
pub trait ContentSource: Send + Sync {
    /// Scan and return all content entries.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if discovery fails (e.g., the content root
    /// is missing or unreadable).
    fn scan(&self) -> Result<Vec<ContentEntry>, SourceError>;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_source_error_new() {
        let err = SourceError::new(SourceErrorKind::NotFound);

        assert_eq!(err.kind, SourceErrorKind::NotFound);
        assert!(err.path.is_none());
        assert!(err.backend.is_none());
    }

    #[test]
    fn test_source_error_not_found() {
        let err = SourceError::not_found("/docs");

        assert_eq!(err.kind, SourceErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some(Path::new("/docs")));
    }

    #[test]
    fn test_source_error_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SourceError::io(io_err, Some(PathBuf::from("/docs")));

        assert_eq!(err.kind, SourceErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some(Path::new("/docs")));
    }

    #[test]
    fn test_source_error_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = SourceError::io(io_err, None);

        assert_eq!(err.kind, SourceErrorKind::PermissionDenied);
    }

    #[test]
    fn test_source_error_display_simple() {
        let err = SourceError::new(SourceErrorKind::NotFound);

        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_source_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SourceError::new(SourceErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("/docs")
            .with_source(io_err);

        assert_eq!(err.to_string(), "[Fs] Not found: no such file (path: /docs)");
    }

    #[test]
    fn test_source_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SourceError>();
    }
}
