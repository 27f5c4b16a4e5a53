//!
//! The on-disk binary cache.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;
use crate::suite::scope::PackageScope;
use crate::suite::test_set::TestSet;

///
/// The on-disk layout of artifacts and cached benchmark binaries:
///
/// ```text
/// <root>/<ref>/artifacts/out.<timestamp>
/// <root>/<ref>/bin/<hash of sorted package scope>/<binary>
/// ```
///
/// Nothing guards a cache key against two concurrent invocations.
///
#[derive(Debug, Clone)]
pub struct BinaryCache {
    /// The cache root directory.
    root: PathBuf,
}

impl BinaryCache {
    /// The per-revision directory holding output files.
    pub const ARTIFACTS_DIRECTORY: &'static str = "artifacts";

    /// The per-revision directory holding binaries for each scope.
    pub const BINARIES_DIRECTORY: &'static str = "bin";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    ///
    /// The cache root directory.
    ///
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    ///
    /// Returns the output file directory of `reference`.
    ///
    pub fn artifacts_directory(&self, reference: &str) -> PathBuf {
        self.root.join(reference).join(Self::ARTIFACTS_DIRECTORY)
    }

    ///
    /// Returns the binary directory of `reference` built for `scope`.
    ///
    pub fn binary_directory(&self, reference: &str, scope: &PackageScope) -> PathBuf {
        self.root
            .join(reference)
            .join(Self::BINARIES_DIRECTORY)
            .join(scope.hash())
    }

    ///
    /// Lists the cached binaries in `directory`.
    ///
    /// Returns `None` on a cache miss. Only files are expected in the directory.
    ///
    pub fn lookup(directory: &Path) -> Result<Option<TestSet>, Error> {
        let entries = match std::fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(Error::filesystem(directory, error)),
        };

        let mut test_files = TestSet::default();
        for entry in entries {
            let entry = entry.map_err(|error| Error::filesystem(directory, error))?;
            let file_type = entry
                .file_type()
                .map_err(|error| Error::filesystem(entry.path(), error))?;
            if file_type.is_dir() {
                return Err(Error::UnexpectedDirectory { path: entry.path() });
            }
            test_files.insert(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(Some(test_files))
    }

    ///
    /// Removes a partially built binary directory, so that the next lookup is a miss.
    ///
    pub fn evict(directory: &Path) {
        if let Err(error) = std::fs::remove_dir_all(directory) {
            if error.kind() != std::io::ErrorKind::NotFound {
                crate::progress::warning("Failed", format!("to remove {directory:?}: {error}"));
            }
        }
    }
}
