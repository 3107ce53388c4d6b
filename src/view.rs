// 🖼️ Dashboard View-Model
// One pure update: parameters in, computed scalars + chart data out

use crate::model::{self, Parameters};
use crate::series::{self, ChartSeries};
use serde::{Deserialize, Serialize};

/// Unicode renderings of the typeset formulas shown next to each value.
pub const INTENSITY_FORMULA: &str = "e = Σ emissions / Σ output";
pub const OUTPUT_CHANGE_FORMULA: &str = "ΔX = (I − A)⁻¹ ΔY";
pub const WAGE_FORMULA: &str = "ΔW = w ⊙ ΔX";
pub const EMPLOYMENT_FORMULA: &str = "ΔN = n ⊙ ΔX";

/// Everything a front-end needs to draw one dashboard frame.
///
/// Recomputed whole on every parameter change; nothing here outlives the
/// change that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewModel {
    /// The inputs this frame was computed from
    pub params: Parameters,

    pub emission_intensity: f64,
    pub delta_x: f64,
    pub delta_w: f64,
    pub delta_n: f64,

    pub intensity_series: ChartSeries,
    pub output_change_series: ChartSeries,
    pub wage_series: ChartSeries,
    pub employment_series: ChartSeries,
}

impl ViewModel {
    /// Compute a full frame from the given parameters.
    pub fn compute(params: Parameters) -> Self {
        let emission_intensity = model::emission_intensity(params.emissions, params.output);
        let delta_x = model::output_change(model::IDENTITY, model::TECH_COEFF, params.delta_y);
        let delta_w = model::wage_impact(delta_x);
        let delta_n = model::employment_impact(delta_x);

        let intensity_series = series::emission_intensity_series(&params);
        let output_change_series = series::output_change_series(&params);
        let (wage_series, employment_series) = series::wage_employment_series(delta_x);

        ViewModel {
            params,
            emission_intensity,
            delta_x,
            delta_w,
            delta_n,
            intensity_series,
            output_change_series,
            wage_series,
            employment_series,
        }
    }

    /// Two-decimal read-out lines, one per derived value, in display order.
    pub fn readouts(&self) -> Vec<String> {
        vec![
            format!("Emission Intensity: {:.2}", self.emission_intensity),
            format!("Total Output Change (deltaX): {:.2}", self.delta_x),
            format!("Wage Impact (deltaW): {:.2}", self.delta_w),
            format!("Employment Impact (deltaN): {:.2}", self.delta_n),
        ]
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_scenario() {
        // sliders (emissions=50, output=100, deltaY=20)
        let vm = ViewModel::compute(Parameters::default());

        assert!((vm.emission_intensity - 0.50).abs() < EPS);
        assert!((vm.delta_x - 100.00).abs() < EPS);
        assert!((vm.delta_w - 200.00).abs() < EPS);
        assert!((vm.delta_n - 300.00).abs() < EPS);
    }

    #[test]
    fn test_zero_output_scenario() {
        // zero output suppresses intensity but leaves deltaX untouched
        let vm = ViewModel::compute(Parameters {
            emissions: 50.0,
            output: 0.0,
            delta_y: 20.0,
        });

        assert_eq!(vm.emission_intensity, 0.0);
        assert!((vm.delta_x - 100.00).abs() < EPS);
    }

    #[test]
    fn test_max_scenario() {
        let vm = ViewModel::compute(Parameters {
            emissions: 500.0,
            output: 500.0,
            delta_y: 500.0,
        });

        assert!((vm.emission_intensity - 1.00).abs() < EPS);
        assert!((vm.delta_x - 2500.00).abs() < EPS);
        assert!((vm.delta_w - 5000.00).abs() < EPS);
        assert!((vm.delta_n - 7500.00).abs() < EPS);
    }

    #[test]
    fn test_deterministic_for_equal_params() {
        let params = Parameters {
            emissions: 135.0,
            output: 45.0,
            delta_y: 310.0,
        };

        let a = ViewModel::compute(params);
        let b = ViewModel::compute(params);

        assert_eq!(a.emission_intensity, b.emission_intensity);
        assert_eq!(a.delta_x, b.delta_x);
        assert_eq!(a.intensity_series.points, b.intensity_series.points);
        assert_eq!(a.wage_series.points, b.wage_series.points);
    }

    #[test]
    fn test_readouts_format_to_two_decimals() {
        let vm = ViewModel::compute(Parameters::default());
        let lines = vm.readouts();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Emission Intensity: 0.50");
        assert_eq!(lines[1], "Total Output Change (deltaX): 100.00");
        assert_eq!(lines[2], "Wage Impact (deltaW): 200.00");
        assert_eq!(lines[3], "Employment Impact (deltaN): 300.00");
    }

    #[test]
    fn test_view_model_serializes() {
        let vm = ViewModel::compute(Parameters::default());
        let json = serde_json::to_string(&vm).unwrap();

        assert!(json.contains("\"emission_intensity\":0.5"));
        assert!(json.contains("\"delta_x\":100.0"));
    }
}
