pub mod datetime;
pub mod reading;
pub mod sample;
