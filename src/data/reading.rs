use serde::{Deserialize, Serialize};

/// A single timestamped sensor measurement. `time` is in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub value: f64,
    pub time: i64,
}

impl SensorReading {
    pub fn new(value: f64, time: i64) -> Self {
        Self { value, time }
    }
}

/// A reading projected into plotting coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: f64,
}

impl From<&SensorReading> for Point {
    fn from(reading: &SensorReading) -> Self {
        Self {
            x: reading.time,
            y: reading.value,
        }
    }
}

impl Point {
    /// Coordinates as expected by the plotting widget.
    pub fn as_plot_coords(&self) -> [f64; 2] {
        [self.x as f64, self.y]
    }
}
