//! Popularity signal derived from application counts.

/// Log-scaled min-max normalization of application counts into `[0, 1]`.
///
/// When no posting has applications, or every posting has the same count,
/// there is no signal and every score is 0.
///
/// ```
/// use hirehub::index::popularity::popularity_scores;
///
/// let scores = popularity_scores(&[0, 9, 99]);
/// assert_eq!(scores[0], 0.0);
/// assert_eq!(scores[2], 1.0);
/// assert!((scores[1] - 0.5).abs() < 1e-12);
/// ```
pub fn popularity_scores(applications: &[u64]) -> Vec<f64> {
    let logs: Vec<f64> = applications.iter().map(|&c| (c as f64).ln_1p()).collect();

    let min = logs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if logs.is_empty() || max <= 0.0 || range <= 0.0 {
        return vec![0.0; logs.len()];
    }

    logs.iter().map(|l| (l - min) / range).collect()
}
