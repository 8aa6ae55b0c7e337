//! Error types for graph reading and the diff run.

use std::path::PathBuf;

/// Failure to load one graph snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid in its RDF syntax.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// The parser produced a term kind that has no [`Term`](crate::Term)
    /// counterpart (quoted triple or variable).
    #[error("unsupported term in {}: {term}", path.display())]
    UnsupportedTerm {
        /// File being parsed.
        path: PathBuf,
        /// Debug rendering of the offending term.
        term: String,
    },
}

/// Failure of a complete diff run.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// Either snapshot failed to load; nothing was written.
    #[error(transparent)]
    Read(#[from] ReadError),
    /// A background read task panicked or was cancelled.
    #[error("graph read task failed")]
    Join(#[from] tokio::task::JoinError),
    /// Writing the report failed.
    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
