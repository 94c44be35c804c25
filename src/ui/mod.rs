pub mod sensor_chart;
