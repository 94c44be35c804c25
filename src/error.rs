use thiserror::Error;

/// Failures of the statistics and axis-range computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("no values to compute over")]
    EmptyInput,
    #[error("sample standard deviation needs at least 2 values, got {count}")]
    InsufficientData { count: usize },
    #[error("value at index {index} is not finite")]
    NonFiniteValue { index: usize },
    #[error("axis range overflows the representable range")]
    RangeOverflow,
}

/// Failures while loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
