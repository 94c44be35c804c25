use std::sync::Arc;

use crate::data::reading::SensorReading;
use crate::processing::axis_range::{compute_range, AxisRange};
use crate::processing::series::{build_series, Series};
use crate::processing::statistics::SeriesStats;
use crate::state::interaction::InteractionState;

/// Presentation-owned chart state.
///
/// Series, range and stats are derived from `readings` and only recomputed
/// when a different reading collection is supplied. Hover transitions touch
/// nothing but `interaction`.
#[derive(Debug, Clone)]
pub struct ChartModel {
    id: String,
    readings: Arc<[SensorReading]>,
    series: Series,
    range: Option<AxisRange>,
    stats: Option<SeriesStats>,
    interaction: InteractionState,
    /// Number of recomputations so far.
    revision: u64,
}

impl ChartModel {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            readings: Arc::from(Vec::new()),
            series: Series::empty(id),
            range: None,
            stats: None,
            interaction: InteractionState::default(),
            revision: 0,
        }
    }

    /// Replace the reading collection. Returns `true` if the derived data was
    /// recomputed, `false` if `readings` is the collection already held.
    pub fn set_readings(&mut self, readings: Arc<[SensorReading]>) -> bool {
        if Arc::ptr_eq(&self.readings, &readings) {
            return false;
        }

        let series = build_series(&self.id, &readings);
        let range = if readings.is_empty() {
            None
        } else {
            match compute_range(&readings) {
                Ok(range) => Some(range),
                Err(e) => {
                    tracing::warn!("Cannot compute axis range for {}: {e}", self.id);
                    None
                }
            }
        };
        let stats = SeriesStats::compute(&series.values());

        self.readings = readings;
        self.series = series;
        self.range = range;
        self.stats = stats;
        self.revision += 1;

        tracing::debug!(
            "Recomputed {} (revision {}): {} points, range {:?}",
            self.id,
            self.revision,
            self.series.len(),
            self.range
        );
        true
    }

    pub fn pointer_entered(&mut self) -> bool {
        self.interaction.pointer_entered()
    }

    pub fn pointer_left(&mut self) -> bool {
        self.interaction.pointer_left()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn readings(&self) -> &Arc<[SensorReading]> {
        &self.readings
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn range(&self) -> Option<AxisRange> {
        self.range
    }

    pub fn stats(&self) -> Option<&SeriesStats> {
        self.stats.as_ref()
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Arc<[SensorReading]> {
        Arc::from(vec![
            SensorReading::new(20.0, 100),
            SensorReading::new(24.0, 50),
            SensorReading::new(22.0, 150),
        ])
    }

    #[test]
    fn new_model_is_empty_and_idle() {
        let model = ChartModel::new("Temperature");
        assert!(model.series().is_empty());
        assert_eq!(model.range(), None);
        assert!(model.stats().is_none());
        assert_eq!(model.interaction(), InteractionState::Idle);
        assert_eq!(model.revision(), 0);
    }

    #[test]
    fn new_collection_recomputes() {
        let mut model = ChartModel::new("Temperature");
        assert!(model.set_readings(data()));
        assert_eq!(model.revision(), 1);
        assert_eq!(model.series().id, "Temperature");
        assert_eq!(model.series().x_extent(), Some((50, 150)));
        assert_eq!(model.range(), Some(AxisRange { min: 18.0, max: 26.0 }));
        assert_eq!(model.stats().map(|s| s.mean), Some(22.0));
    }

    #[test]
    fn same_collection_is_not_recomputed() {
        let mut model = ChartModel::new("Temperature");
        let readings = data();
        model.set_readings(Arc::clone(&readings));
        assert!(!model.set_readings(Arc::clone(&readings)));
        assert_eq!(model.revision(), 1);
    }

    #[test]
    fn equal_contents_in_new_collection_recompute() {
        let mut model = ChartModel::new("Temperature");
        model.set_readings(data());
        assert!(model.set_readings(data()));
        assert_eq!(model.revision(), 2);
    }

    #[test]
    fn empty_collection_clears_range() {
        let mut model = ChartModel::new("Temperature");
        model.set_readings(data());
        assert!(model.set_readings(Arc::from(Vec::new())));
        assert!(model.series().is_empty());
        assert_eq!(model.range(), None);
        assert!(model.stats().is_none());
    }

    #[test]
    fn non_finite_value_leaves_no_range() {
        let mut model = ChartModel::new("Temperature");
        model.set_readings(Arc::from(vec![
            SensorReading::new(1.0, 1),
            SensorReading::new(f64::NAN, 2),
        ]));
        assert_eq!(model.series().len(), 2);
        assert_eq!(model.range(), None);
    }

    #[test]
    fn hover_does_not_recompute() {
        let mut model = ChartModel::new("Temperature");
        model.set_readings(data());
        let series = model.series().clone();

        assert!(model.pointer_entered());
        assert!(model.interaction().is_hovered());
        assert!(model.pointer_left());

        assert_eq!(model.revision(), 1);
        assert_eq!(model.series(), &series);
    }
}
