//!
//! The Go toolchain.
//!

use std::path::Path;
use std::process::Command;

use super::Toolchain;

/// The suffix `go test -c` gives to test binaries.
pub const TEST_BINARY_SUFFIX: &str = ".test";

///
/// The Go toolchain.
///
#[derive(Debug, Clone)]
pub struct Go {
    /// The executable name.
    pub executable: String,
}

impl Go {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "go";

    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> anyhow::Result<Self> {
        let executable = Self::DEFAULT_EXECUTABLE_NAME.to_owned();
        if let Err(error) = which::which(executable.as_str()) {
            anyhow::bail!("The `{executable}` executable not found in ${{PATH}}: {error}");
        }
        Ok(Self { executable })
    }
}

impl Toolchain for Go {
    fn expand_packages(&self, patterns: &[String]) -> anyhow::Result<Vec<String>> {
        let output = Command::new(self.executable.as_str())
            .arg("list")
            .args(patterns)
            .output()
            .map_err(|error| {
                anyhow::anyhow!("{} subprocess spawning error: {:?}", self.executable, error)
            })?;
        if !output.status.success() {
            anyhow::bail!(
                "{} list error: {}",
                self.executable,
                String::from_utf8_lossy(output.stderr.as_slice()).trim()
            );
        }

        Ok(String::from_utf8_lossy(output.stdout.as_slice())
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }

    fn build_benchmark_binary(
        &self,
        package: &str,
        directory: &Path,
    ) -> anyhow::Result<Option<String>> {
        let binary_name = package_to_test_binary(package);
        let binary_path = directory.join(binary_name.as_str());

        // The output is captured so that "no test files" notices stay off the terminal.
        let output = Command::new(self.executable.as_str())
            .arg("test")
            .arg("-c")
            .arg("-o")
            .arg(binary_path.as_os_str())
            .arg(package)
            .output()
            .map_err(|error| {
                anyhow::anyhow!("{} subprocess spawning error: {:?}", self.executable, error)
            })?;
        if !output.status.success() {
            anyhow::bail!(
                "{} test -c {package} error: {}{}",
                self.executable,
                String::from_utf8_lossy(output.stdout.as_slice()),
                String::from_utf8_lossy(output.stderr.as_slice()).trim()
            );
        }

        if binary_path.is_file() {
            Ok(Some(binary_name))
        } else {
            Ok(None)
        }
    }
}

///
/// Returns the test binary name for a package import path.
///
/// Separators become `_`, while literal `_` and `%` are percent-escaped, so that distinct
/// packages never share a binary name.
///
pub fn package_to_test_binary(package: &str) -> String {
    let mut name = String::with_capacity(package.len() + TEST_BINARY_SUFFIX.len());
    for character in package.trim_start_matches("./").chars() {
        match character {
            '/' => name.push('_'),
            '_' => name.push_str("%5F"),
            '%' => name.push_str("%25"),
            character => name.push(character),
        }
    }
    name.push_str(TEST_BINARY_SUFFIX);
    name
}

///
/// Returns the package import path for a test binary name.
///
pub fn test_binary_to_package(binary: &str) -> String {
    binary
        .strip_suffix(TEST_BINARY_SUFFIX)
        .unwrap_or(binary)
        .replace('_', "/")
        .replace("%5F", "_")
        .replace("%25", "%")
}
