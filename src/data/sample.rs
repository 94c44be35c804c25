use std::f64::consts::TAU;

use crate::data::reading::SensorReading;

/// Spacing between sample readings, in seconds.
pub const SAMPLE_INTERVAL_SECS: i64 = 30 * 60;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Built-in temperature dataset for the demo shell.
///
/// Produces `count` readings spaced [`SAMPLE_INTERVAL_SECS`] apart starting at
/// midnight UTC of `day` (days since the epoch), following a daily cycle with
/// some ripple. Readings are returned out of chronological order and the
/// reading at the middle of the day is reported twice, so consumers see the
/// same shape of input a real sensor feed produces.
pub fn sample_readings(day: i64, count: usize) -> Vec<SensorReading> {
    let start = day * SECS_PER_DAY;
    let ordered: Vec<SensorReading> = (0..count)
        .map(|i| {
            let phase = i as f64 / count.max(1) as f64;
            let value = 21.0
                + 3.0 * (TAU * (phase - 0.25)).sin()
                + 0.4 * (TAU * 7.0 * phase + day as f64).sin();
            let value = (value * 10.0).round() / 10.0;
            SensorReading::new(value, start + i as i64 * SAMPLE_INTERVAL_SECS)
        })
        .collect();

    // Odd slots newest-first, then even slots oldest-first.
    let mut readings: Vec<SensorReading> = ordered.iter().skip(1).step_by(2).rev().copied().collect();
    readings.extend(ordered.iter().step_by(2).copied());

    if let Some(mid) = ordered.get(count / 2) {
        readings.push(SensorReading::new(mid.value + 0.1, mid.time));
    }

    readings
}
