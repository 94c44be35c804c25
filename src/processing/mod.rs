pub mod axis_range;
pub mod series;
pub mod statistics;
