//!
//! The subprocess executor.
//!

use std::fs::File;
use std::path::Path;
use std::process::Command;
use std::process::Stdio;

use super::termination::Termination;
use super::Executor;

///
/// Runs Go test binaries in benchmark-only mode as subprocesses.
///
#[derive(Debug, Default, Clone)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    /// Skips plain tests, runs every benchmark, and reports allocations.
    pub const BENCHMARK_ARGUMENTS: [&'static str; 5] =
        ["-test.run", "-", "-test.bench", ".", "-test.benchmem"];

    /// The flag silencing diagnostic logging, if the binary defines it.
    pub const DIAGNOSTIC_FLAG: &'static str = "logtostderr";

    /// The value of the diagnostic flag disabling all logging.
    pub const DIAGNOSTIC_FLAG_VALUE: &'static str = "NONE";

    ///
    /// Whether the `--help` output of `binary` mentions the diagnostic flag.
    ///
    /// `--help` exits with an error status, so only the output is inspected. A binary that
    /// cannot be probed fails later on the real run.
    ///
    pub fn supports_diagnostic_flag(binary: &Path) -> bool {
        Command::new(binary)
            .arg("--help")
            .stdin(Stdio::null())
            .output()
            .map(|output| {
                let needle = Self::DIAGNOSTIC_FLAG.as_bytes();
                [output.stdout, output.stderr].iter().any(|stream| {
                    stream
                        .windows(needle.len())
                        .any(|window| window == needle)
                })
            })
            .unwrap_or_default()
    }

    ///
    /// Returns the full argument list for a benchmark run.
    ///
    pub fn arguments(suppress_diagnostics: bool) -> Vec<String> {
        let mut arguments: Vec<String> = Self::BENCHMARK_ARGUMENTS
            .iter()
            .map(|argument| argument.to_string())
            .collect();
        if suppress_diagnostics {
            arguments.push(format!("--{}", Self::DIAGNOSTIC_FLAG));
            arguments.push(Self::DIAGNOSTIC_FLAG_VALUE.to_owned());
        }
        arguments
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, binary: &Path, output: &File) -> anyhow::Result<Termination> {
        let arguments = Self::arguments(Self::supports_diagnostic_flag(binary));

        let stdout = output
            .try_clone()
            .map_err(|error| anyhow::anyhow!("output file cloning error: {error}"))?;
        let stderr = output
            .try_clone()
            .map_err(|error| anyhow::anyhow!("output file cloning error: {error}"))?;
        let status = Command::new(binary)
            .args(arguments.as_slice())
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status()
            .map_err(|error| {
                anyhow::anyhow!("{binary:?} {arguments:?} subprocess spawning error: {error:?}")
            })?;

        Ok(Termination::from(status))
    }
}
