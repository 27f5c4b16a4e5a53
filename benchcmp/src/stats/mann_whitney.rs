//!
//! The Mann-Whitney U test.
//!

///
/// Why the test cannot decide.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// One of the samples is empty.
    #[error("too few samples")]
    SampleSize,
    /// Every value in both samples is the same.
    #[error("all equal")]
    SamplesEqual,
}

///
/// Returns the two-sided p-value of the hypothesis that both samples come from the same
/// distribution.
///
/// Uses the normal approximation of the U statistic with tie and continuity corrections.
///
pub fn p_value(first: &[f64], second: &[f64]) -> Result<f64, Error> {
    if first.is_empty() || second.is_empty() {
        return Err(Error::SampleSize);
    }

    let n1 = first.len() as f64;
    let n2 = second.len() as f64;
    let n = n1 + n2;

    let mut pooled: Vec<(f64, bool)> = first
        .iter()
        .map(|value| (*value, true))
        .chain(second.iter().map(|value| (*value, false)))
        .collect();
    pooled.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut first_rank_sum = 0.0;
    let mut tie_correction = 0.0;
    let mut start = 0;
    while start < pooled.len() {
        let mut end = start + 1;
        while end < pooled.len() && pooled[end].0 == pooled[start].0 {
            end += 1;
        }
        let ties = (end - start) as f64;
        // Ranks are 1-based, tied values share the mean of their ranks.
        let rank = (start + end + 1) as f64 / 2.0;
        let first_count = pooled[start..end]
            .iter()
            .filter(|(_, is_first)| *is_first)
            .count();
        first_rank_sum += rank * first_count as f64;
        tie_correction += ties * ties * ties - ties;
        start = end;
    }

    let u = first_rank_sum - n1 * (n1 + 1.0) / 2.0;
    let mean = n1 * n2 / 2.0;
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_correction / (n * (n - 1.0)));
    if variance <= 0.0 {
        return Err(Error::SamplesEqual);
    }

    let z = ((u - mean).abs() - 0.5).max(0.0) / variance.sqrt();
    Ok(erfc(z / std::f64::consts::SQRT_2).min(1.0))
}

///
/// The complementary error function, with fractional error below 1.2e-7.
///
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let polynomial = -z * z - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87 + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let result = t * polynomial.exp();
    if x >= 0.0 {
        result
    } else {
        2.0 - result
    }
}
