//!
//! The interleaved benchmark runner.
//!

pub mod executor;

use crate::error::Error;
use crate::progress;
use crate::suite::BenchSuite;
use crate::toolchain::go::test_binary_to_package;

use self::executor::termination::Termination;
use self::executor::Executor;

///
/// Runs the common benchmarks of two suites, alternating between them.
///
/// Within every iteration of every test the old suite runs strictly before the new one, so a
/// slow drift of the machine state is spread across both revisions instead of being
/// attributed to one of them. All iterations of a test finish before the next test starts.
///
pub struct InterleavedRunner<'a> {
    /// Runs a single binary.
    executor: &'a dyn Executor,
    /// The exit code meaning that the binary reported failed benchmarks.
    failure_exit_code: i32,
}

impl<'a> InterleavedRunner<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(executor: &'a dyn Executor, failure_exit_code: i32) -> Self {
        Self {
            executor,
            failure_exit_code,
        }
    }

    ///
    /// Runs every test `iterations` times under both suites.
    ///
    pub fn run(
        &self,
        old: &BenchSuite,
        new: &BenchSuite,
        tests: &[String],
        iterations: usize,
    ) -> Result<(), Error> {
        progress::status(
            "Running",
            format!("{} benchmark binaries, {iterations} iterations each", tests.len()),
        );
        for (test_index, test) in tests.iter().enumerate() {
            for iteration in 0..iterations {
                progress::status(
                    "Running",
                    format!(
                        "pkg={} iter={} {}",
                        progress::fraction(test_index + 1, tests.len()),
                        progress::fraction(iteration + 1, iterations),
                        test_binary_to_package(test.as_str()),
                    ),
                );
                self.run_single(old, test.as_str())?;
                self.run_single(new, test.as_str())?;
            }
        }
        Ok(())
    }

    ///
    /// Runs the binary `test` of `suite` once.
    ///
    fn run_single(&self, suite: &BenchSuite, test: &str) -> Result<(), Error> {
        let binary = suite.test_binary(test)?;
        let output = suite.output()?;

        let termination = match self.executor.execute(binary.as_path(), output) {
            Ok(termination) => termination,
            Err(error) => return Err(Error::Run { binary, error }),
        };
        let location = suite
            .output_path()
            .map(|path| format!(", output in {path:?}"))
            .unwrap_or_default();
        let error = match termination {
            Termination::Exited(0) => return Ok(()),
            Termination::Exited(code) if code == self.failure_exit_code => {
                progress::warning(
                    "Failed",
                    format!(
                        "`{}` {test} saw one or more benchmark failures",
                        suite.reference()
                    ),
                );
                return Ok(());
            }
            Termination::Exited(code) => anyhow::anyhow!("exit code {code}{location}"),
            Termination::Abnormal(description) => {
                anyhow::anyhow!("abnormal termination: {description}{location}")
            }
        };
        Err(Error::Run { binary, error })
    }
}
