// 📈 Chart Series Generators
// Synthetic line-chart data sampled from the model formulas

use crate::model::{self, Parameters};
use serde::{Deserialize, Serialize};

/// Samples per series.
pub const SAMPLES: usize = 100;

// ============================================================================
// SERIES DATA
// ============================================================================

/// One named line on a chart: ordered (x, y) pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label for this line
    pub label: String,

    /// Exactly `SAMPLES` ordered points
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    pub fn new(label: &str, points: Vec<(f64, f64)>) -> Self {
        ChartSeries {
            label: label.to_string(),
            points,
        }
    }

    /// Largest x value in the series (0.0 when empty).
    pub fn x_max(&self) -> f64 {
        self.points.iter().map(|(x, _)| *x).fold(0.0, f64::max)
    }

    /// Largest y value in the series (0.0 when empty).
    pub fn y_max(&self) -> f64 {
        self.points.iter().map(|(_, y)| *y).fold(0.0, f64::max)
    }
}

/// `count` evenly spaced samples over [start, stop], endpoints exact.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Degenerate-range guard: sweep at least [0, 1] when the driver is 0.
fn sweep_max(value: f64) -> f64 {
    value.max(1.0)
}

// ============================================================================
// GENERATORS
// ============================================================================

/// Emission-intensity curve over an output sweep.
///
/// The x axis sweeps [0, max(output, 1)] while y sweeps an independent
/// [0, 500] range scaled by emissions / max(output, 1): the y values are
/// NOT a point-wise function of x. Intentional shipped behavior; do not
/// rewrite as intensity × x without clarifying the model first.
pub fn emission_intensity_series(params: &Parameters) -> ChartSeries {
    let scale = params.emissions / sweep_max(params.output);
    let xs = linspace(0.0, sweep_max(params.output), SAMPLES);
    let ys = linspace(0.0, Parameters::MAX, SAMPLES);

    let points = xs
        .into_iter()
        .zip(ys.into_iter().map(|y| y * scale))
        .collect();

    ChartSeries::new("Emission Intensity", points)
}

/// Output-change curve: deltaX = (I − A)⁻¹ deltaY, point-wise over a
/// deltaY sweep. Uses the same singular fallback as the scalar formula.
pub fn output_change_series(params: &Parameters) -> ChartSeries {
    let points = linspace(0.0, sweep_max(params.delta_y), SAMPLES)
        .into_iter()
        .map(|x| (x, model::output_change(model::IDENTITY, model::TECH_COEFF, x)))
        .collect();

    ChartSeries::new("deltaX", points)
}

/// Wage and employment curves over a deltaX sweep: two lines, one chart.
pub fn wage_employment_series(delta_x: f64) -> (ChartSeries, ChartSeries) {
    let xs = linspace(0.0, sweep_max(delta_x), SAMPLES);

    let wage = xs
        .iter()
        .map(|&x| (x, model::wage_impact(x)))
        .collect();
    let employment = xs
        .iter()
        .map(|&x| (x, model::employment_impact(x)))
        .collect();

    (
        ChartSeries::new("Wage Impact", wage),
        ChartSeries::new("Employment Impact", employment),
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let xs = linspace(0.0, 500.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[99], 500.0);

        let step = 500.0 / 99.0;
        for window in xs.windows(2) {
            assert!((window[1] - window[0] - step).abs() < 1e-6);
        }
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_all_series_have_100_points() {
        let params = Parameters::default();

        assert_eq!(emission_intensity_series(&params).points.len(), SAMPLES);
        assert_eq!(output_change_series(&params).points.len(), SAMPLES);

        let (wage, employment) = wage_employment_series(100.0);
        assert_eq!(wage.points.len(), SAMPLES);
        assert_eq!(employment.points.len(), SAMPLES);
    }

    #[test]
    fn test_zero_inputs_guarded_to_unit_sweep() {
        let params = Parameters {
            emissions: 50.0,
            output: 0.0,
            delta_y: 0.0,
        };

        let intensity = emission_intensity_series(&params);
        assert_eq!(intensity.points.len(), SAMPLES);
        assert!((intensity.x_max() - 1.0).abs() < EPS);

        let output_change = output_change_series(&params);
        assert_eq!(output_change.points.len(), SAMPLES);
        assert!((output_change.x_max() - 1.0).abs() < EPS);

        let (wage, _) = wage_employment_series(0.0);
        assert!((wage.x_max() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_emission_intensity_sweep_is_decoupled_from_x() {
        // y sweeps 0..500 scaled by emissions/max(output,1), independent
        // of the x axis values
        let params = Parameters::default();
        let series = emission_intensity_series(&params);

        let scale = params.emissions / params.output; // 0.5
        let (x_last, y_last) = series.points[SAMPLES - 1];
        assert!((x_last - 100.0).abs() < EPS);
        assert!((y_last - 500.0 * scale).abs() < EPS);
        // point-wise intensity × x would give 50, not 250
        assert!((y_last - 250.0).abs() < EPS);
    }

    #[test]
    fn test_output_change_series_is_pointwise_leontief() {
        let params = Parameters::default();
        let series = output_change_series(&params);

        for (x, y) in &series.points {
            assert!((y - 5.0 * x).abs() < EPS);
        }
        assert!((series.x_max() - params.delta_y).abs() < EPS);
    }

    #[test]
    fn test_wage_employment_series_slopes() {
        let (wage, employment) = wage_employment_series(100.0);

        for (x, y) in &wage.points {
            assert!((y - 2.0 * x).abs() < EPS);
        }
        for (x, y) in &employment.points {
            assert!((y - 3.0 * x).abs() < EPS);
        }
    }
}
