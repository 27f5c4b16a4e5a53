//!
//! The XLSX workbook report sink.
//!

pub mod worksheet;

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::report::sink::ReportSink;
use crate::stats::table::Table;

use self::worksheet::Worksheet;

///
/// Writes each report into a new XLSX workbook in a directory.
///
#[derive(Debug, Clone)]
pub struct XlsxSink {
    /// The directory receiving the workbooks.
    directory: PathBuf,
}

impl XlsxSink {
    /// The directory under the cache root receiving the workbooks.
    pub const DIRECTORY: &'static str = "reports";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    ///
    /// Returns the workbook file name for `title`.
    ///
    pub fn file_name(title: &str) -> String {
        let stem: String = title
            .chars()
            .map(|character| match character {
                character if character.is_ascii_alphanumeric() => character,
                '-' | '.' => character,
                _ => '_',
            })
            .collect();
        format!("{stem}.xlsx")
    }
}

impl ReportSink for XlsxSink {
    fn create_report(&self, title: &str, tables: &[Table]) -> anyhow::Result<String> {
        std::fs::create_dir_all(self.directory.as_path()).map_err(|error| {
            anyhow::anyhow!("Report directory {:?} creating: {error}", self.directory)
        })?;

        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(Worksheet::summary(title, tables)?.into_inner());
        let mut names = BTreeSet::from([Worksheet::SUMMARY_NAME.to_lowercase()]);
        for table in tables.iter() {
            let name = Worksheet::unique_name(table.metric.as_str(), &mut names);
            workbook.push_worksheet(Worksheet::comparison(name, table)?.into_inner());
        }

        let path = self.directory.join(Self::file_name(title));
        workbook
            .save(path.as_path())
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
        Ok(path.to_string_lossy().into_owned())
    }
}
