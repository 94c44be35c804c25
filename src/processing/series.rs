use serde::{Deserialize, Serialize};

use crate::data::reading::{Point, SensorReading};

/// Chart-ready projection of readings, ordered ascending by `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn empty(id: &str) -> Self {
        Self {
            id: id.to_string(),
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last timestamp, or `None` for an empty series.
    pub fn x_extent(&self) -> Option<(i64, i64)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Sort `readings` by time and project them into plotting coordinates.
///
/// The sort is stable, so readings sharing a timestamp keep their input
/// order. The caller's slice is never reordered.
pub fn build_series(id: &str, readings: &[SensorReading]) -> Series {
    let mut sorted = readings.to_vec();
    sorted.sort_by_key(|r| r.time);

    Series {
        id: id.to_string(),
        points: sorted.iter().map(Point::from).collect(),
    }
}
