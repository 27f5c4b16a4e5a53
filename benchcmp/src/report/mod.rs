//!
//! The comparison reporter.
//!

pub mod sink;
pub mod xlsx;

use std::fs::File;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;

use crate::error::Error;
use crate::output_format::OutputFormat;
use crate::progress;
use crate::stats::settings::Order;
use crate::stats::settings::Settings;
use crate::stats::Input;
use crate::stats::StatsEngine;
use crate::suite::scope::PackageScope;
use crate::suite::BenchSuite;

use self::sink::ReportSink;

///
/// Turns the accumulated output of both suites into comparison tables.
///
pub struct ComparisonReporter<'a> {
    /// Computes the tables.
    engine: &'a dyn StatsEngine,
    /// Receives the tables instead of `stdout`, if set.
    sink: Option<&'a dyn ReportSink>,
    /// The `stdout` rendering format.
    output_format: OutputFormat,
}

impl<'a> ComparisonReporter<'a> {
    /// The significance threshold of reported changes.
    pub const ALPHA: f64 = 0.05;

    /// The label of the old suite column.
    pub const OLD_LABEL: &'static str = "old";

    /// The label of the new suite column.
    pub const NEW_LABEL: &'static str = "new";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        engine: &'a dyn StatsEngine,
        sink: Option<&'a dyn ReportSink>,
        output_format: OutputFormat,
    ) -> Self {
        Self {
            engine,
            sink,
            output_format,
        }
    }

    ///
    /// The statistics settings: fixed significance, best changes first.
    ///
    pub fn settings() -> Settings {
        Settings::new(Self::ALPHA, Order::BestDeltaFirst)
    }

    ///
    /// Returns the report title.
    ///
    pub fn title(scope: &PackageScope, old: &str, new: &str) -> String {
        format!("benchcmp: {scope} ({old} -> {new})")
    }

    ///
    /// Computes the comparison and writes it to the sink or to `writer`.
    ///
    pub fn report(
        &self,
        old: &BenchSuite,
        new: &BenchSuite,
        scope: &PackageScope,
        writer: &mut dyn Write,
    ) -> Result<(), Error> {
        let mut old_output = Self::rewind(old)?;
        let mut new_output = Self::rewind(new)?;

        let tables = self
            .engine
            .tables(
                &Self::settings(),
                vec![
                    Input {
                        label: Self::OLD_LABEL,
                        reader: &mut old_output,
                    },
                    Input {
                        label: Self::NEW_LABEL,
                        reader: &mut new_output,
                    },
                ],
            )
            .map_err(Error::Report)?;

        if let Some(sink) = self.sink {
            let title = Self::title(scope, old.reference(), new.reference());
            let locator = sink
                .create_report(title.as_str(), tables.as_slice())
                .map_err(Error::Report)?;
            progress::status("Generated", format!("sheet `{title}`"));
            writeln!(writer, "generated sheet: {locator}")
                .map_err(|error| Error::Report(error.into()))?;
            return Ok(());
        }

        match self.output_format {
            OutputFormat::Text => crate::stats::text::write(writer, tables.as_slice())
                .map_err(|error| Error::Report(error.into())),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, &tables)
                    .map_err(|error| Error::Report(error.into()))?;
                writeln!(writer).map_err(|error| Error::Report(error.into()))
            }
        }
    }

    ///
    /// Seeks the suite output back to its start for reading.
    ///
    fn rewind(suite: &BenchSuite) -> Result<&File, Error> {
        let mut output = suite.output()?;
        output.seek(SeekFrom::Start(0)).map_err(|error| {
            Error::Report(anyhow::anyhow!(
                "Benchmark output of `{}` rewinding: {error}",
                suite.reference()
            ))
        })?;
        Ok(output)
    }
}
