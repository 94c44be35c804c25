pub mod chart_model;
pub mod interaction;
pub mod settings;
pub mod theme;
