// CBAM Impact Dashboard - Core Library
// Exposes the model, chart data, and view-model for the TUI, server, and tests

pub mod model;
pub mod series;
pub mod view;

// Re-export commonly used types
pub use model::{
    emission_intensity, employment_impact, output_change, wage_impact, Parameters, EMPLOYMENT_COEFF,
    IDENTITY, TECH_COEFF, WAGE_COEFF,
};
pub use series::{
    emission_intensity_series, linspace, output_change_series, wage_employment_series, ChartSeries,
    SAMPLES,
};
pub use view::{
    ViewModel, EMPLOYMENT_FORMULA, INTENSITY_FORMULA, OUTPUT_CHANGE_FORMULA, WAGE_FORMULA,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
