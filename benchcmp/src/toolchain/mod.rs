//!
//! The package expansion and benchmark binary build collaborator.
//!

pub mod go;

use std::path::Path;

///
/// Expands package patterns and builds one benchmark binary per package.
///
pub trait Toolchain {
    ///
    /// Expands package patterns into concrete package identifiers.
    ///
    fn expand_packages(&self, patterns: &[String]) -> anyhow::Result<Vec<String>>;

    ///
    /// Builds the benchmark binary of `package` into `directory`.
    ///
    /// Returns the binary file name, or `None` if the package has nothing to benchmark.
    ///
    fn build_benchmark_binary(
        &self,
        package: &str,
        directory: &Path,
    ) -> anyhow::Result<Option<String>>;
}
