//!
//! The benchmark comparison arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark comparison arguments.
///
/// Builds and runs the Go benchmarks of the given packages under two revisions, alternating
/// between them, and compares the results.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The old revision. Defaults to the parent of the new revision.
    #[arg(short, long)]
    pub old: Option<String>,

    /// The new revision. Defaults to the current checkout.
    #[arg(short, long)]
    pub new: Option<String>,

    /// The number of interleaved iterations of every benchmark binary.
    #[arg(short, long, default_value_t = benchcmp::DEFAULT_ITERATIONS)]
    pub count: usize,

    /// The shell command run after each checkout, e.g. to regenerate build metadata.
    #[arg(long)]
    pub post_checkout: Option<String>,

    /// Writes the comparison into a spreadsheet instead of `stdout`.
    #[arg(long)]
    pub sheets: bool,

    /// The `stdout` output format: `text` or `json`.
    #[arg(long, default_value_t = benchcmp::OutputFormat::Text)]
    pub format: benchcmp::OutputFormat,

    /// The root of the artifact and binary cache.
    #[arg(long, default_value = benchcmp::DEFAULT_CACHE_DIRECTORY)]
    pub cache_directory: PathBuf,

    /// The exit code benchmark binaries use to report failed benchmarks.
    #[arg(long, default_value_t = benchcmp::DEFAULT_FAILURE_EXIT_CODE)]
    pub failure_exit_code: i32,

    /// The package patterns to benchmark, e.g. `./pkg/kv`.
    pub packages: Vec<String>,
}

impl Arguments {
    ///
    /// Validates the arguments and converts them into the comparison configuration.
    ///
    pub fn validate(self) -> anyhow::Result<benchcmp::Config> {
        if self.count == 0 {
            anyhow::bail!("The iteration count must be at least 1.");
        }
        if self.packages.iter().any(|package| package.trim().is_empty()) {
            anyhow::bail!("Package patterns must not be empty.");
        }
        if self.failure_exit_code == 0 {
            anyhow::bail!("The benchmark failure exit code must not be 0.");
        }

        let mut config = benchcmp::Config::new(benchcmp::PackageScope::new(self.packages));
        config.old_ref = self.old;
        config.new_ref = self.new;
        config.iterations = self.count;
        config.post_checkout = self.post_checkout;
        config.use_sheets = self.sheets;
        config.output_format = self.format;
        config.cache_directory = self.cache_directory;
        config.failure_exit_code = self.failure_exit_code;
        Ok(config)
    }
}
