//!
//! The benchmark statistics collaborator.
//!

pub mod benchstat;
pub mod mann_whitney;
pub mod metric;
pub mod parser;
pub mod settings;
pub mod summary;
pub mod table;
pub mod text;

use std::io::Read;

use self::settings::Settings;
use self::table::Table;

///
/// A labeled stream of raw benchmark output.
///
pub struct Input<'a> {
    /// The column label, e.g. `old` or `new`.
    pub label: &'a str,
    /// The raw benchmark output.
    pub reader: &'a mut dyn Read,
}

///
/// Computes comparison tables from raw benchmark output.
///
pub trait StatsEngine {
    ///
    /// Computes one table per metric, comparing the first input against the second.
    ///
    fn tables(&self, settings: &Settings, inputs: Vec<Input<'_>>) -> anyhow::Result<Vec<Table>>;
}
