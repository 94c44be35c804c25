pub mod app;
pub mod data;
pub mod error;
pub mod processing;
pub mod state;
pub mod ui;

pub use data::reading::{Point, SensorReading};
pub use error::ChartError;
pub use processing::axis_range::{compute_range, AxisRange};
pub use processing::series::{build_series, Series};
pub use processing::statistics::{mean, sample_std_deviation};
pub use state::chart_model::ChartModel;
pub use state::interaction::{InteractionState, PointerEvent};
