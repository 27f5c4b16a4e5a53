//!
//! The per-revision summary of a benchmark.
//!

///
/// The summary of the repeated measurements of one benchmark under one revision.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Summary {
    /// The number of measurements kept after outlier rejection.
    pub count: usize,
    /// The number of measurements before outlier rejection.
    pub total: usize,
    /// The mean of the kept measurements.
    pub mean: f64,
    /// The largest relative distance of the kept extremes from the mean.
    pub variation: f64,
    /// The kept measurements, in input order.
    #[serde(skip)]
    pub values: Vec<f64>,
}

impl Summary {
    /// The interquartile range multiplier outside which measurements are outliers.
    pub const OUTLIER_IQR_FACTOR: f64 = 1.5;

    ///
    /// Summarizes `values`, rejecting outliers. Returns `None` for no values.
    ///
    pub fn new(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let q1 = quantile(sorted.as_slice(), 0.25);
        let q3 = quantile(sorted.as_slice(), 0.75);
        let iqr = q3 - q1;
        let low = q1 - Self::OUTLIER_IQR_FACTOR * iqr;
        let high = q3 + Self::OUTLIER_IQR_FACTOR * iqr;

        let kept: Vec<f64> = values
            .iter()
            .copied()
            .filter(|value| (low..=high).contains(value))
            .collect();
        let mean = kept.iter().sum::<f64>() / kept.len() as f64;
        let min = kept.iter().copied().fold(f64::INFINITY, f64::min);
        let max = kept.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variation = if mean == 0.0 {
            0.0
        } else {
            (1.0 - min / mean).max(max / mean - 1.0)
        };

        Some(Self {
            count: kept.len(),
            total: values.len(),
            mean,
            variation,
            values: kept,
        })
    }
}

///
/// Returns the `q` quantile of sorted `values` with linear interpolation.
///
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
