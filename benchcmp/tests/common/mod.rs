//!
//! In-memory collaborators shared by the integration tests.
//!

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use benchcmp::toolchain::go::package_to_test_binary;
use benchcmp::Table;
use benchcmp::Termination;

/// The short form of the oldest commit.
pub const GRANDPARENT: &str = "aaa1111";

/// The short form of the parent of the checked out commit.
pub const PARENT: &str = "bbb2222";

/// The short form of the checked out commit.
pub const HEAD: &str = "ccc3333";

/// The checked out branch.
pub const BRANCH: &str = "trunk";

///
/// Returns the full hash of a short commit.
///
pub fn full(short: &str) -> String {
    format!("{short}{}", "0".repeat(40 - short.len()))
}

///
/// A linear history of three commits with `HEAD` on top.
///
pub struct FakeRevisionControl {
    /// The commit hashes, oldest first.
    pub history: Vec<String>,
    /// The checked out branch, `None` if detached.
    pub branch: Option<String>,
    /// Every checkout with its post-checkout hook.
    pub checkouts: RefCell<Vec<(String, Option<String>)>>,
    /// The reference whose checkout fails.
    pub failing_checkout: Option<String>,
}

impl Default for FakeRevisionControl {
    fn default() -> Self {
        Self {
            history: [GRANDPARENT, PARENT, HEAD].into_iter().map(full).collect(),
            branch: Some(BRANCH.to_owned()),
            checkouts: RefCell::new(Vec::new()),
            failing_checkout: None,
        }
    }
}

impl FakeRevisionControl {
    pub fn detached() -> Self {
        Self {
            branch: None,
            ..Self::default()
        }
    }

    pub fn checkouts(&self) -> Vec<(String, Option<String>)> {
        self.checkouts.borrow().clone()
    }

    fn position(&self, reference: &str) -> Option<usize> {
        if reference.is_empty() {
            return None;
        }
        self.history
            .iter()
            .position(|commit| commit.starts_with(reference))
    }
}

impl benchcmp::RevisionControl for FakeRevisionControl {
    fn current_revision(&self) -> anyhow::Result<String> {
        self.history
            .last()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("empty history"))
    }

    fn parent_revision(&self, reference: &str) -> anyhow::Result<String> {
        match self.position(reference) {
            Some(position) if position > 0 => Ok(self.history[position - 1].clone()),
            _ => anyhow::bail!("`{reference}` has no parent"),
        }
    }

    fn shorten(&self, reference: &str) -> anyhow::Result<String> {
        match self.position(reference) {
            Some(position) => Ok(self.history[position][..7].to_owned()),
            None => Ok(reference.to_owned()),
        }
    }

    fn is_valid(&self, reference: &str) -> anyhow::Result<bool> {
        Ok(reference.len() == 7 && self.position(reference).is_some())
    }

    fn current_symbolic_ref(&self) -> anyhow::Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn checkout(&self, reference: &str, post_checkout: Option<&str>) -> anyhow::Result<()> {
        self.checkouts
            .borrow_mut()
            .push((reference.to_owned(), post_checkout.map(str::to_owned)));
        if self.failing_checkout.as_deref() == Some(reference) {
            anyhow::bail!("cannot check out `{reference}`");
        }
        Ok(())
    }
}

///
/// Writes an empty file per package instead of compiling it.
///
#[derive(Default)]
pub struct FakeToolchain {
    /// The expansion of every pattern set.
    pub packages: Vec<String>,
    /// Packages without benchmarks.
    pub without_benchmarks: Vec<String>,
    /// The package whose build fails.
    pub failing: Option<String>,
    /// Every expanded pattern set.
    pub expansions: RefCell<Vec<Vec<String>>>,
    /// Every attempted package build.
    pub builds: RefCell<Vec<String>>,
}

impl FakeToolchain {
    pub fn new(packages: &[&str]) -> Self {
        Self {
            packages: packages.iter().map(|package| package.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn builds(&self) -> Vec<String> {
        self.builds.borrow().clone()
    }
}

impl benchcmp::Toolchain for FakeToolchain {
    fn expand_packages(&self, patterns: &[String]) -> anyhow::Result<Vec<String>> {
        self.expansions.borrow_mut().push(patterns.to_vec());
        Ok(self.packages.clone())
    }

    fn build_benchmark_binary(
        &self,
        package: &str,
        directory: &Path,
    ) -> anyhow::Result<Option<String>> {
        self.builds.borrow_mut().push(package.to_owned());
        if self.failing.as_deref() == Some(package) {
            anyhow::bail!("compiling `{package}` failed");
        }
        if self.without_benchmarks.iter().any(|name| name == package) {
            return Ok(None);
        }
        let name = package_to_test_binary(package);
        std::fs::write(directory.join(name.as_str()), b"")?;
        Ok(Some(name))
    }
}

///
/// Appends one synthetic measurement per run instead of running the binary.
///
#[derive(Default)]
pub struct FakeExecutor {
    /// The base `ns/op` per revision directory name.
    pub timings: BTreeMap<String, f64>,
    /// The exit code per binary file name, `0` if absent.
    pub exit_codes: BTreeMap<String, i32>,
    /// The binary file name stopped by a signal.
    pub killed: Option<String>,
    /// Every executed binary.
    pub runs: RefCell<Vec<PathBuf>>,
}

impl FakeExecutor {
    pub fn with_timings(timings: &[(&str, f64)]) -> Self {
        Self {
            timings: timings
                .iter()
                .map(|(reference, value)| (reference.to_string(), *value))
                .collect(),
            ..Self::default()
        }
    }

    pub fn runs(&self) -> Vec<PathBuf> {
        self.runs.borrow().clone()
    }

    ///
    /// Returns the revision directory name of each run, e.g. `[PARENT, HEAD]`.
    ///
    pub fn run_references(&self) -> Vec<String> {
        self.runs()
            .iter()
            .map(|binary| reference_of(binary.as_path()))
            .collect()
    }
}

impl benchcmp::Executor for FakeExecutor {
    fn execute(&self, binary: &Path, output: &File) -> anyhow::Result<Termination> {
        self.runs.borrow_mut().push(binary.to_owned());
        let iteration = self.runs.borrow().len() as f64;

        let reference = reference_of(binary);
        let base = self.timings.get(&reference).copied().unwrap_or(100.0);
        let name = binary
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut output = output;
        writeln!(output, "pkg: {}", name.trim_end_matches(".test"))?;
        writeln!(
            output,
            "BenchmarkGet-8   \t 1000000\t {:.1} ns/op\t 16 B/op\t 1 allocs/op",
            base + iteration
        )?;

        if self.killed.as_deref() == Some(name.as_str()) {
            return Ok(Termination::Abnormal("signal: 9 (SIGKILL)".to_owned()));
        }
        let code = self.exit_codes.get(&name).copied().unwrap_or(0);
        Ok(Termination::Exited(code))
    }
}

///
/// Returns the revision directory of a binary laid out as `<root>/<ref>/bin/<hash>/<name>`.
///
pub fn reference_of(binary: &Path) -> String {
    binary
        .ancestors()
        .nth(3)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

///
/// Keeps every report in memory.
///
#[derive(Default)]
pub struct RecordingSink {
    /// The title and table count of every report.
    pub reports: RefCell<Vec<(String, usize)>>,
}

impl benchcmp::ReportSink for RecordingSink {
    fn create_report(&self, title: &str, tables: &[Table]) -> anyhow::Result<String> {
        self.reports
            .borrow_mut()
            .push((title.to_owned(), tables.len()));
        Ok(format!("memory://{}", self.reports.borrow().len()))
    }
}

///
/// Creates cached binaries for `reference` and `scope` so that building is a cache hit.
///
pub fn seed_cache(
    cache: &benchcmp::BinaryCache,
    reference: &str,
    scope: &benchcmp::PackageScope,
    binaries: &[&str],
) -> PathBuf {
    let directory = cache.binary_directory(reference, scope);
    std::fs::create_dir_all(directory.as_path()).unwrap();
    for binary in binaries.iter() {
        std::fs::write(directory.join(binary), b"").unwrap();
    }
    directory
}
