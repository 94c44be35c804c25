use crate::error::ChartError;

/// Arithmetic mean of `values`.
pub fn mean(values: &[f64]) -> Result<f64, ChartError> {
    if values.is_empty() {
        return Err(ChartError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (Bessel's correction, `n - 1` denominator).
///
/// Two-pass: the mean is computed first, then the squared deviations.
/// A constant sequence gives exactly `0.0`, independent of how the mean rounds.
pub fn sample_std_deviation(values: &[f64]) -> Result<f64, ChartError> {
    let m = mean(values)?;
    let count = values.len();
    if count < 2 {
        return Err(ChartError::InsufficientData { count });
    }
    if values.iter().all(|&v| v == values[0]) {
        return Ok(0.0);
    }
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (count - 1) as f64;
    Ok(variance.sqrt())
}

/// Summary statistics for a series of values.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub peak_to_peak: f64,
    pub mean: f64,
    /// `None` when there are fewer than two values.
    pub std_dev: Option<f64>,
}

impl SeriesStats {
    /// Compute statistics from `values`, filtering out NaN and infinities.
    /// Returns `None` when no finite value is left.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let vals: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let mean = mean(&vals).ok()?;
        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(SeriesStats {
            count: vals.len(),
            min,
            max,
            peak_to_peak: max - min,
            mean,
            std_dev: sample_std_deviation(&vals).ok(),
        })
    }

    /// Format as a single-line report string.
    pub fn report(&self, label: &str) -> String {
        let std_dev = match self.std_dev {
            Some(s) => format!("{s:.2}"),
            None => "n/a".to_string(),
        };
        format!(
            "{}: n={}  min={:.2}  max={:.2}  p-p={:.2}  mean={:.2}  σ={}",
            label, self.count, self.min, self.max, self.peak_to_peak, self.mean, std_dev
        )
    }
}
