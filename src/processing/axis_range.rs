use serde::{Deserialize, Serialize};

use crate::data::reading::SensorReading;
use crate::error::ChartError;
use crate::processing::statistics::sample_std_deviation;

/// Vertical axis bounds for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Padded vertical range for `readings`.
///
/// The observed `[min, max]` is widened on both sides by one sample standard
/// deviation. A single reading has no spread and gets zero padding.
pub fn compute_range(readings: &[SensorReading]) -> Result<AxisRange, ChartError> {
    if readings.is_empty() {
        return Err(ChartError::EmptyInput);
    }

    let values: Vec<f64> = readings.iter().map(|r| r.value).collect();
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(ChartError::NonFiniteValue { index });
    }

    let padding = match sample_std_deviation(&values) {
        Ok(s) => s,
        Err(ChartError::InsufficientData { .. }) => 0.0,
        Err(e) => return Err(e),
    };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let range = AxisRange {
        min: min - padding,
        max: max + padding,
    };
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(ChartError::RangeOverflow);
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(values: &[f64]) -> Vec<SensorReading> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| SensorReading::new(v, i as i64))
            .collect()
    }

    #[test]
    fn pads_by_one_standard_deviation() {
        let input = vec![
            SensorReading::new(20.0, 100),
            SensorReading::new(24.0, 50),
            SensorReading::new(22.0, 150),
        ];
        assert_eq!(compute_range(&input), Ok(AxisRange { min: 18.0, max: 26.0 }));
    }

    #[test]
    fn range_strictly_contains_data_with_spread() {
        let input = readings(&[1.5, -2.0, 7.25, 3.0]);
        let range = compute_range(&input).unwrap();
        assert!(range.min < -2.0);
        assert!(range.max > 7.25);
        assert!(input.iter().all(|r| range.contains(r.value)));
    }

    #[test]
    fn constant_data_is_not_padded() {
        let range = compute_range(&readings(&[4.0, 4.0, 4.0])).unwrap();
        assert_eq!(range, AxisRange { min: 4.0, max: 4.0 });
        assert_eq!(range.span(), 0.0);
    }

    #[test]
    fn inexact_constant_data_is_not_padded() {
        let range = compute_range(&readings(&[0.1, 0.1, 0.1])).unwrap();
        assert_eq!(range, AxisRange { min: 0.1, max: 0.1 });
    }

    #[test]
    fn huge_constant_values_stay_finite() {
        let range = compute_range(&readings(&[1e308, 1e308])).unwrap();
        assert_eq!(range, AxisRange { min: 1e308, max: 1e308 });
    }

    #[test]
    fn overflowing_spread_is_rejected() {
        assert_eq!(
            compute_range(&readings(&[-1e308, 1e308])),
            Err(ChartError::RangeOverflow)
        );
        assert_eq!(
            compute_range(&readings(&[1e308, 1.5e308])),
            Err(ChartError::RangeOverflow)
        );
    }

    #[test]
    fn single_reading_gets_zero_padding() {
        let range = compute_range(&readings(&[12.5])).unwrap();
        assert_eq!(range, AxisRange { min: 12.5, max: 12.5 });
    }

    #[test]
    fn empty_readings_are_an_error() {
        assert_eq!(compute_range(&[]), Err(ChartError::EmptyInput));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(
            compute_range(&readings(&[1.0, f64::NAN, 2.0])),
            Err(ChartError::NonFiniteValue { index: 1 })
        );
        assert_eq!(
            compute_range(&readings(&[f64::INFINITY])),
            Err(ChartError::NonFiniteValue { index: 0 })
        );
    }
}
