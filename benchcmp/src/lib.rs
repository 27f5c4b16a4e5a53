//!
//! The benchmark comparison library.
//!

pub mod comparison;
pub mod config;
pub mod error;
pub mod output_format;
pub mod progress;
pub mod refs;
pub mod report;
pub mod runner;
pub mod stats;
pub mod suite;
pub mod toolchain;
pub mod vcs;

pub use crate::comparison::Comparison;
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::output_format::OutputFormat;
pub use crate::report::sink::ReportSink;
pub use crate::report::xlsx::XlsxSink;
pub use crate::report::ComparisonReporter;
pub use crate::runner::executor::process::ProcessExecutor;
pub use crate::runner::executor::termination::Termination;
pub use crate::runner::executor::Executor;
pub use crate::runner::InterleavedRunner;
pub use crate::stats::benchstat::Benchstat;
pub use crate::stats::settings::Order as StatsOrder;
pub use crate::stats::settings::Settings as StatsSettings;
pub use crate::stats::table::Table;
pub use crate::stats::StatsEngine;
pub use crate::suite::cache::BinaryCache;
pub use crate::suite::scope::PackageScope;
pub use crate::suite::test_set::TestSet;
pub use crate::suite::BenchSuite;
pub use crate::suite::BuildEnvironment;
pub use crate::toolchain::go::Go;
pub use crate::toolchain::Toolchain;
pub use crate::vcs::git::Git;
pub use crate::vcs::guard::CheckoutGuard;
pub use crate::vcs::RevisionControl;

/// The default cache root directory, relative to the working directory.
pub const DEFAULT_CACHE_DIRECTORY: &str = "./benchcmp";

/// The default number of interleaved iterations per benchmark binary.
pub const DEFAULT_ITERATIONS: usize = 10;

/// The exit code benchmark binaries use to report failed benchmarks.
pub const DEFAULT_FAILURE_EXIT_CODE: i32 = 1;
