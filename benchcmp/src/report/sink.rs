//!
//! The report sink collaborator.
//!

use crate::stats::table::Table;

///
/// Renders a named tabular report somewhere outside the terminal.
///
pub trait ReportSink {
    ///
    /// Renders `tables` under `title` and returns where the report can be found.
    ///
    fn create_report(&self, title: &str, tables: &[Table]) -> anyhow::Result<String>;
}
