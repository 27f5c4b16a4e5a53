//!
//! The benchmark comparison configuration.
//!

use std::path::PathBuf;

use crate::output_format::OutputFormat;
use crate::suite::scope::PackageScope;

///
/// The benchmark comparison configuration.
///
/// Built once at startup and passed by reference to every stage.
///
#[derive(Debug, Clone)]
pub struct Config {
    /// The old revision, defaults to the parent of the new one.
    pub old_ref: Option<String>,
    /// The new revision, defaults to the current checkout.
    pub new_ref: Option<String>,
    /// The number of interleaved iterations per benchmark binary.
    pub iterations: usize,
    /// The command run after each checkout to make the tree buildable.
    pub post_checkout: Option<String>,
    /// Whether to render the comparison into a spreadsheet instead of `stdout`.
    pub use_sheets: bool,
    /// The `stdout` rendering format.
    pub output_format: OutputFormat,
    /// The root of the artifact and binary cache tree.
    pub cache_directory: PathBuf,
    /// The exit code benchmark binaries use to report failed benchmarks.
    pub failure_exit_code: i32,
    /// The requested package patterns.
    pub scope: PackageScope,
}

impl Config {
    ///
    /// A shortcut constructor with default settings for everything except the scope.
    ///
    pub fn new(scope: PackageScope) -> Self {
        Self {
            old_ref: None,
            new_ref: None,
            iterations: crate::DEFAULT_ITERATIONS,
            post_checkout: None,
            use_sheets: false,
            output_format: OutputFormat::default(),
            cache_directory: PathBuf::from(crate::DEFAULT_CACHE_DIRECTORY),
            failure_exit_code: crate::DEFAULT_FAILURE_EXIT_CODE,
            scope,
        }
    }
}
