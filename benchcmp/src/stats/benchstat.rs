//!
//! The `benchstat`-style statistics engine.
//!

use std::collections::BTreeMap;

use crate::stats::mann_whitney;
use crate::stats::metric;
use crate::stats::parser::Parser;
use crate::stats::settings::Order;
use crate::stats::settings::Settings;
use crate::stats::summary::Summary;
use crate::stats::table::Delta;
use crate::stats::table::Row;
use crate::stats::table::Table;
use crate::stats::Input;
use crate::stats::StatsEngine;

/// The measurements of one benchmark and unit, per input.
type Samples = [Vec<f64>; 2];

///
/// Compares two Go benchmark outputs the way `benchstat` does.
///
#[derive(Debug, Default, Clone)]
pub struct Benchstat {
    /// The benchmark output parser.
    parser: Parser,
}

impl StatsEngine for Benchstat {
    fn tables(&self, settings: &Settings, inputs: Vec<Input<'_>>) -> anyhow::Result<Vec<Table>> {
        if inputs.len() != 2 {
            anyhow::bail!(
                "Expected two benchmark outputs to compare, got {}",
                inputs.len()
            );
        }

        let mut labels = Vec::with_capacity(2);
        let mut units: Vec<String> = Vec::new();
        let mut samples: BTreeMap<(String, Option<String>, String), Samples> = BTreeMap::new();
        for (index, input) in inputs.into_iter().enumerate() {
            labels.push(input.label.to_owned());
            for measurement in self.parser.parse(input.reader)? {
                if !units.contains(&measurement.unit) {
                    units.push(measurement.unit.clone());
                }
                samples
                    .entry((measurement.unit, measurement.package, measurement.name))
                    .or_default()[index]
                    .push(measurement.value);
            }
        }

        let tables = units
            .into_iter()
            .map(|unit| {
                let mut rows: Vec<Row> = samples
                    .iter()
                    .filter(|((row_unit, _, _), _)| row_unit == &unit)
                    .map(|((_, package, name), [old, new])| {
                        Self::row(package.clone(), name.clone(), old, new, settings.alpha)
                    })
                    .collect();
                Self::sort(
                    rows.as_mut_slice(),
                    settings.order,
                    metric::is_larger_better(unit.as_str()),
                );
                Table {
                    metric: metric::name(unit.as_str()).to_owned(),
                    unit,
                    old_label: labels[0].clone(),
                    new_label: labels[1].clone(),
                    rows,
                }
            })
            .collect();
        Ok(tables)
    }
}

impl Benchstat {
    ///
    /// Summarizes both samples of a benchmark and tests their difference.
    ///
    fn row(package: Option<String>, name: String, old: &[f64], new: &[f64], alpha: f64) -> Row {
        let old = Summary::new(old);
        let new = Summary::new(new);
        let delta = match (old.as_ref(), new.as_ref()) {
            (Some(old), Some(new)) => {
                match mann_whitney::p_value(old.values.as_slice(), new.values.as_slice()) {
                    Ok(_) if old.mean == 0.0 => Delta::Inconclusive {
                        reason: "zero baseline".to_owned(),
                    },
                    Ok(p_value) if p_value < alpha => Delta::Change {
                        percent: (new.mean / old.mean - 1.0) * 100.0,
                        p_value,
                    },
                    Ok(p_value) => Delta::Insignificant { p_value },
                    Err(error) => Delta::Inconclusive {
                        reason: error.to_string(),
                    },
                }
            }
            _ => Delta::Missing,
        };
        Row {
            package,
            name,
            old,
            new,
            delta,
        }
    }

    ///
    /// Sorts rows by name, or by how favorable their change is across the whole table.
    ///
    /// The sort is stable, so rows with equal scores keep the package and name order.
    ///
    fn sort(rows: &mut [Row], order: Order, is_larger_better: bool) {
        match order {
            Order::Name => rows.sort_by(|a, b| {
                a.package
                    .cmp(&b.package)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            Order::BestDeltaFirst => rows.sort_by(|a, b| {
                b.score(is_larger_better)
                    .total_cmp(&a.score(is_larger_better))
            }),
        }
    }
}
