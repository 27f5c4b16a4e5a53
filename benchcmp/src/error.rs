//!
//! The benchmark comparison errors.
//!

use std::path::PathBuf;

///
/// The benchmark comparison errors.
///
/// Every variant is fatal for the whole comparison. Recoverable conditions, such as cache hits
/// or benchmark failures reported by a binary, never reach this type.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The reference does not resolve to a commit.
    #[error("invalid git ref `{reference}`")]
    InvalidRef {
        /// The shortened reference.
        reference: String,
    },
    /// A read-only revision control query failed.
    #[error("revision control query: {0}")]
    RevisionControl(anyhow::Error),
    /// The suite has already been built once.
    #[error("benchmark suite for `{reference}` is already built")]
    AlreadyBuilt {
        /// The suite reference.
        reference: String,
    },
    /// The suite is used before being built.
    #[error("benchmark suite for `{reference}` is not built")]
    NotBuilt {
        /// The suite reference.
        reference: String,
    },
    /// An artifact or cache path could not be created or read.
    #[error("{path:?}: {error}")]
    Filesystem {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The binary cache directory contains a nested directory.
    #[error("unexpected directory {path:?}")]
    UnexpectedDirectory {
        /// The nested directory path.
        path: PathBuf,
    },
    /// Checkout, post-checkout hook, package expansion, or compilation failed.
    #[error("building benchmarks for `{reference}`: {error}")]
    Build {
        /// The suite reference.
        reference: String,
        /// The underlying collaborator error.
        error: anyhow::Error,
    },
    /// A benchmark binary terminated abnormally.
    #[error("running {binary:?}: {error}")]
    Run {
        /// The benchmark binary path.
        binary: PathBuf,
        /// The termination details.
        error: anyhow::Error,
    },
    /// Statistics computation or report upload failed.
    #[error("processing benchmark output: {0}")]
    Report(anyhow::Error),
}

impl Error {
    ///
    /// A shortcut constructor for filesystem errors.
    ///
    pub fn filesystem(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            error,
        }
    }
}
