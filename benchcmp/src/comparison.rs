//!
//! The benchmark comparison orchestrator.
//!

use std::io::Write;

use chrono::Utc;

use crate::config::Config;
use crate::error::Error;
use crate::progress;
use crate::refs;
use crate::report::sink::ReportSink;
use crate::report::ComparisonReporter;
use crate::runner::executor::Executor;
use crate::runner::InterleavedRunner;
use crate::stats::StatsEngine;
use crate::suite::cache::BinaryCache;
use crate::suite::BenchSuite;
use crate::suite::BuildEnvironment;
use crate::toolchain::Toolchain;
use crate::vcs::guard::CheckoutGuard;
use crate::vcs::RevisionControl;

///
/// Compares the benchmarks of two revisions.
///
pub struct Comparison<'a> {
    /// The run configuration.
    config: &'a Config,
    /// Resolves and checks out revisions.
    revision_control: &'a dyn RevisionControl,
    /// Expands patterns and builds binaries.
    toolchain: &'a dyn Toolchain,
    /// Runs binaries.
    executor: &'a dyn Executor,
    /// Computes the comparison tables.
    engine: &'a dyn StatsEngine,
    /// Receives the report instead of `writer`, if set.
    sink: Option<&'a dyn ReportSink>,
}

impl<'a> Comparison<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        config: &'a Config,
        revision_control: &'a dyn RevisionControl,
        toolchain: &'a dyn Toolchain,
        executor: &'a dyn Executor,
        engine: &'a dyn StatsEngine,
        sink: Option<&'a dyn ReportSink>,
    ) -> Self {
        Self {
            config,
            revision_control,
            toolchain,
            executor,
            engine,
            sink,
        }
    }

    ///
    /// Resolves, builds, runs, and reports, writing the report to `writer`.
    ///
    /// Nothing is reported if any stage fails.
    ///
    pub fn run(&self, writer: &mut dyn Write) -> Result<(), Error> {
        let (old_ref, new_ref) = refs::resolve(
            self.revision_control,
            self.config.old_ref.as_deref(),
            self.config.new_ref.as_deref(),
        )?;
        progress::status(
            "Comparing",
            format!("`{old_ref}` -> `{new_ref}` for {}", self.config.scope),
        );

        let mut old = BenchSuite::new(old_ref);
        let mut new = BenchSuite::new(new_ref);
        self.build(&mut old, &mut new)?;

        let tests = old.intersect_tests(&new).sorted();
        InterleavedRunner::new(self.executor, self.config.failure_exit_code).run(
            &old,
            &new,
            tests.as_slice(),
            self.config.iterations,
        )?;

        ComparisonReporter::new(self.engine, self.sink, self.config.output_format).report(
            &old,
            &new,
            &self.config.scope,
            writer,
        )
    }

    ///
    /// Builds both suites, restoring the original checkout afterwards on every path.
    ///
    fn build(&self, old: &mut BenchSuite, new: &mut BenchSuite) -> Result<(), Error> {
        let cache = BinaryCache::new(self.config.cache_directory.as_path());
        let environment = BuildEnvironment {
            revision_control: self.revision_control,
            toolchain: self.toolchain,
            cache: &cache,
            post_checkout: self.config.post_checkout.as_deref(),
        };
        let timestamp = Utc::now();

        let _guard =
            CheckoutGuard::capture(self.revision_control).map_err(Error::RevisionControl)?;
        old.build(&environment, &self.config.scope, timestamp)?;
        new.build(&environment, &self.config.scope, timestamp)?;
        Ok(())
    }
}
