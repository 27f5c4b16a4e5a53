//!
//! The comparison table.
//!

use crate::stats::metric;
use crate::stats::summary::Summary;

///
/// The comparison of all benchmarks reporting one metric.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Table {
    /// The metric name, e.g. `time/op`.
    pub metric: String,
    /// The raw unit, e.g. `ns/op`.
    pub unit: String,
    /// The label of the baseline column.
    pub old_label: String,
    /// The label of the compared column.
    pub new_label: String,
    /// The rows in display order.
    pub rows: Vec<Row>,
}

impl Table {
    ///
    /// Whether larger values of the metric are improvements.
    ///
    pub fn is_larger_better(&self) -> bool {
        metric::is_larger_better(self.unit.as_str())
    }

    ///
    /// Returns the column captions.
    ///
    pub fn header(&self) -> [String; 4] {
        [
            "name".to_owned(),
            format!("{} {}", self.old_label, self.metric),
            format!("{} {}", self.new_label, self.metric),
            "delta".to_owned(),
        ]
    }

    ///
    /// Returns the formatted cells of `row`.
    ///
    pub fn cells(&self, row: &Row) -> [String; 4] {
        [
            row.name.clone(),
            self.format_summary(row.old.as_ref()),
            self.format_summary(row.new.as_ref()),
            row.format_delta(),
        ]
    }

    ///
    /// Formats a summary as `mean ± variation%`.
    ///
    fn format_summary(&self, summary: Option<&Summary>) -> String {
        match summary {
            Some(summary) => format!(
                "{} ± {:.0}%",
                metric::format_value(summary.mean, self.unit.as_str()),
                summary.variation * 100.0
            ),
            None => String::new(),
        }
    }
}

///
/// The comparison of one benchmark.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Row {
    /// The benchmark package.
    pub package: Option<String>,
    /// The benchmark name.
    pub name: String,
    /// The baseline summary, if the benchmark ran there.
    pub old: Option<Summary>,
    /// The compared summary, if the benchmark ran there.
    pub new: Option<Summary>,
    /// The difference between the summaries.
    pub delta: Delta,
}

impl Row {
    ///
    /// Returns `1` for a significant improvement, `-1` for a significant regression, `0` otherwise.
    ///
    pub fn change(&self, is_larger_better: bool) -> i8 {
        match self.delta {
            Delta::Change { percent, .. } if percent == 0.0 => 0,
            Delta::Change { percent, .. } if (percent > 0.0) == is_larger_better => 1,
            Delta::Change { .. } => -1,
            _ => 0,
        }
    }

    ///
    /// Returns the sort key placing the most favorable changes first when sorted descending.
    ///
    pub fn score(&self, is_larger_better: bool) -> f64 {
        match self.delta {
            Delta::Change { percent, .. } => {
                percent.abs() * f64::from(self.change(is_larger_better))
            }
            _ => 0.0,
        }
    }

    ///
    /// Formats the delta column.
    ///
    pub fn format_delta(&self) -> String {
        let counts = format!(
            "n={}+{}",
            self.old.as_ref().map(|summary| summary.count).unwrap_or_default(),
            self.new.as_ref().map(|summary| summary.count).unwrap_or_default()
        );
        match &self.delta {
            Delta::Change { percent, p_value } => {
                format!("{percent:+.2}% (p={p_value:.3} {counts})")
            }
            Delta::Insignificant { p_value } => format!("~ (p={p_value:.3} {counts})"),
            Delta::Inconclusive { reason } => format!("~ ({reason})"),
            Delta::Missing => String::new(),
        }
    }
}

///
/// The difference between the two summaries of a row.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Delta {
    /// A statistically significant change, in percent of the baseline mean.
    Change {
        /// The relative change in percent.
        percent: f64,
        /// The p-value of the change.
        p_value: f64,
    },
    /// No significant change.
    Insignificant {
        /// The p-value of the comparison.
        p_value: f64,
    },
    /// The samples do not allow a test.
    Inconclusive {
        /// Why the test was not possible.
        reason: String,
    },
    /// The benchmark is missing from one side.
    Missing,
}
