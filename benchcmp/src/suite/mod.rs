//!
//! The benchmark suite of one revision.
//!

pub mod cache;
pub mod scope;
pub mod test_set;

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;

use crate::error::Error;
use crate::progress;
use crate::toolchain::Toolchain;
use crate::vcs::RevisionControl;

use self::cache::BinaryCache;
use self::scope::PackageScope;
use self::test_set::TestSet;

///
/// The collaborators a suite build needs.
///
#[derive(Clone, Copy)]
pub struct BuildEnvironment<'a> {
    /// Checks out the suite revision.
    pub revision_control: &'a dyn RevisionControl,
    /// Expands patterns and builds binaries.
    pub toolchain: &'a dyn Toolchain,
    /// The artifact and binary layout.
    pub cache: &'a BinaryCache,
    /// The command run after checkout.
    pub post_checkout: Option<&'a str>,
}

///
/// The build and run state of one revision.
///
#[derive(Debug)]
pub struct BenchSuite {
    /// The canonical short revision.
    reference: String,
    /// The output file path.
    output_path: Option<PathBuf>,
    /// The output file every benchmark run of the suite appends to.
    output: Option<File>,
    /// The cached binary directory.
    binary_directory: Option<PathBuf>,
    /// The binaries built or found in the cache.
    test_files: TestSet,
}

impl BenchSuite {
    /// The output file timestamp format.
    const OUTPUT_TIMESTAMP_FORMAT: &'static str = "%Y-%m-%dT%H_%M_%SZ";

    ///
    /// Creates an empty suite.
    ///
    pub fn new(reference: String) -> Self {
        Self {
            reference,
            output_path: None,
            output: None,
            binary_directory: None,
            test_files: TestSet::default(),
        }
    }

    ///
    /// The canonical short revision.
    ///
    pub fn reference(&self) -> &str {
        self.reference.as_str()
    }

    ///
    /// The binaries built or found in the cache.
    ///
    pub fn test_files(&self) -> &TestSet {
        &self.test_files
    }

    ///
    /// The output file path, once the suite is built.
    ///
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    ///
    /// The cached binary directory, once the suite is built.
    ///
    pub fn binary_directory(&self) -> Option<&Path> {
        self.binary_directory.as_deref()
    }

    ///
    /// The output file shared by all runs of the suite.
    ///
    pub fn output(&self) -> Result<&File, Error> {
        self.output.as_ref().ok_or_else(|| Error::NotBuilt {
            reference: self.reference.clone(),
        })
    }

    ///
    /// Returns the path to the binary `name`.
    ///
    pub fn test_binary(&self, name: &str) -> Result<PathBuf, Error> {
        self.binary_directory
            .as_ref()
            .map(|directory| directory.join(name))
            .ok_or_else(|| Error::NotBuilt {
                reference: self.reference.clone(),
            })
    }

    ///
    /// Returns the binaries present in both suites.
    ///
    pub fn intersect_tests(&self, other: &Self) -> TestSet {
        self.test_files.intersect(&other.test_files)
    }

    ///
    /// Builds the suite binaries for `scope`, or picks them up from the cache.
    ///
    /// A suite can only be built once. On a cache miss, a failure leaves no binary directory
    /// behind, so the next invocation does not mistake a partial build for a cached one.
    ///
    pub fn build(
        &mut self,
        environment: &BuildEnvironment<'_>,
        scope: &PackageScope,
        timestamp: DateTime<Utc>,
    ) -> Result<(), Error> {
        if !self.test_files.is_empty() {
            return Err(Error::AlreadyBuilt {
                reference: self.reference.clone(),
            });
        }

        let artifacts_directory = environment.cache.artifacts_directory(self.reference());
        std::fs::create_dir_all(artifacts_directory.as_path())
            .map_err(|error| Error::filesystem(artifacts_directory.as_path(), error))?;

        let output_path = artifacts_directory.join(format!(
            "out.{}",
            timestamp.format(Self::OUTPUT_TIMESTAMP_FORMAT)
        ));
        let output = std::fs::OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(output_path.as_path())
            .map_err(|error| Error::filesystem(output_path.as_path(), error))?;
        self.output = Some(output);
        self.output_path = Some(output_path);

        let binary_directory = environment
            .cache
            .binary_directory(self.reference(), scope);
        self.binary_directory = Some(binary_directory.clone());
        if let Some(test_files) = BinaryCache::lookup(binary_directory.as_path())? {
            progress::status(
                "Skipping",
                format!(
                    "build, benchmark binaries for `{}` already exist",
                    self.reference
                ),
            );
            self.test_files = test_files;
            return Ok(());
        }

        std::fs::create_dir_all(binary_directory.as_path())
            .map_err(|error| Error::filesystem(binary_directory.as_path(), error))?;
        match self.build_binaries(environment, scope, binary_directory.as_path()) {
            Ok(test_files) => {
                self.test_files = test_files;
                Ok(())
            }
            Err(error) => {
                BinaryCache::evict(binary_directory.as_path());
                Err(Error::Build {
                    reference: self.reference.clone(),
                    error,
                })
            }
        }
    }

    ///
    /// Checks out the suite revision and builds every package into `directory`.
    ///
    fn build_binaries(
        &self,
        environment: &BuildEnvironment<'_>,
        scope: &PackageScope,
        directory: &Path,
    ) -> anyhow::Result<TestSet> {
        progress::status("Checking", format!("out `{}`", self.reference));
        environment
            .revision_control
            .checkout(self.reference(), environment.post_checkout)?;

        let packages = environment.toolchain.expand_packages(scope.patterns())?;

        let mut test_files = TestSet::default();
        for (index, package) in packages.iter().enumerate() {
            if let Some(binary) = environment
                .toolchain
                .build_benchmark_binary(package.as_str(), directory)?
            {
                if !test_files.insert(binary.clone()) {
                    anyhow::bail!(
                        "benchmark binary `{binary}` of {package} overwrote another package"
                    );
                }
            }
            progress::status(
                "Built",
                format!(
                    "[{}] `{}` {package}",
                    progress::fraction(index + 1, packages.len()),
                    self.reference
                ),
            );
        }
        Ok(test_files)
    }
}
