// 📐 CBAM Impact Model - Scalar Formulas
// Parameters, fixed coefficients, and the four derived quantities

use serde::{Deserialize, Serialize};

// ============================================================================
// FIXED COEFFICIENTS
// ============================================================================

/// Scalar stand-in for the identity matrix I.
pub const IDENTITY: f64 = 1.0;

/// Scalar stand-in for the MRIO technical-coefficient matrix A (dummy fixed).
pub const TECH_COEFF: f64 = 0.8;

/// Scalar stand-in for the wage vector w (dummy fixed).
pub const WAGE_COEFF: f64 = 2.0;

/// Scalar stand-in for the employment vector n (dummy fixed).
pub const EMPLOYMENT_COEFF: f64 = 3.0;

// ============================================================================
// PARAMETERS
// ============================================================================

/// The three user-adjustable inputs. Everything else derives from these
/// and the fixed coefficients above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Total emissions, bounded [0, 500]
    pub emissions: f64,

    /// Total output, bounded [0, 500]
    pub output: f64,

    /// Direct demand impact (deltaY), bounded [0, 500]
    pub delta_y: f64,
}

impl Parameters {
    /// Slider lower bound shared by all three inputs
    pub const MIN: f64 = 0.0;

    /// Slider upper bound shared by all three inputs
    pub const MAX: f64 = 500.0;

    /// Slider step shared by all three inputs
    pub const STEP: f64 = 5.0;

    pub const DEFAULT_EMISSIONS: f64 = 50.0;
    pub const DEFAULT_OUTPUT: f64 = 100.0;
    pub const DEFAULT_DELTA_Y: f64 = 20.0;

    /// Clamp a raw value into the shared slider range.
    pub fn clamp(value: f64) -> f64 {
        value.clamp(Self::MIN, Self::MAX)
    }

    pub fn set_emissions(&mut self, value: f64) {
        self.emissions = Self::clamp(value);
    }

    pub fn set_output(&mut self, value: f64) {
        self.output = Self::clamp(value);
    }

    pub fn set_delta_y(&mut self, value: f64) {
        self.delta_y = Self::clamp(value);
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            emissions: Self::DEFAULT_EMISSIONS,
            output: Self::DEFAULT_OUTPUT,
            delta_y: Self::DEFAULT_DELTA_Y,
        }
    }
}

// ============================================================================
// FORMULAS
// ============================================================================

/// Emission intensity: e = emissions / output.
///
/// Zero output is a defined fallback (0.0), not an error.
pub fn emission_intensity(emissions: f64, output: f64) -> f64 {
    if output != 0.0 {
        emissions / output
    } else {
        0.0
    }
}

/// Total output change: ΔX = (I − A)⁻¹ ΔY, reduced to scalars.
///
/// A singular difference (identity − tech_coeff == 0) is a defined
/// fallback (0.0), matching the zero-output rule in `emission_intensity`.
/// With the shipped coefficients this is exactly 5 × delta_y.
pub fn output_change(identity: f64, tech_coeff: f64, delta_y: f64) -> f64 {
    let leontief = identity - tech_coeff;
    if leontief != 0.0 {
        delta_y / leontief
    } else {
        0.0
    }
}

/// Wage impact: ΔW = w ⊙ ΔX.
pub fn wage_impact(delta_x: f64) -> f64 {
    WAGE_COEFF * delta_x
}

/// Employment impact: ΔN = n ⊙ ΔX.
pub fn employment_impact(delta_x: f64) -> f64 {
    EMPLOYMENT_COEFF * delta_x
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_emission_intensity_ratio() {
        assert!((emission_intensity(50.0, 100.0) - 0.5).abs() < EPS);
        assert!((emission_intensity(500.0, 500.0) - 1.0).abs() < EPS);
        assert!((emission_intensity(0.0, 250.0) - 0.0).abs() < EPS);
    }

    #[test]
    fn test_emission_intensity_zero_output_fallback() {
        assert_eq!(emission_intensity(50.0, 0.0), 0.0);
        assert_eq!(emission_intensity(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_output_change_is_five_times_delta_y() {
        // (1.0 - 0.8)^-1 == 5
        for delta_y in [0.0, 5.0, 20.0, 137.5, 500.0] {
            let delta_x = output_change(IDENTITY, TECH_COEFF, delta_y);
            assert!((delta_x - 5.0 * delta_y).abs() < EPS);
        }
    }

    #[test]
    fn test_output_change_singular_fallback() {
        assert_eq!(output_change(1.0, 1.0, 20.0), 0.0);
        assert_eq!(output_change(0.8, 0.8, 500.0), 0.0);
    }

    #[test]
    fn test_wage_and_employment_scaling() {
        for delta_x in [0.0, 1.0, 100.0, 2500.0] {
            assert!((wage_impact(delta_x) - 2.0 * delta_x).abs() < EPS);
            assert!((employment_impact(delta_x) - 3.0 * delta_x).abs() < EPS);
        }
    }

    #[test]
    fn test_parameter_defaults() {
        let params = Parameters::default();
        assert_eq!(params.emissions, 50.0);
        assert_eq!(params.output, 100.0);
        assert_eq!(params.delta_y, 20.0);
    }

    #[test]
    fn test_parameter_setters_clamp() {
        let mut params = Parameters::default();

        params.set_emissions(600.0);
        assert_eq!(params.emissions, 500.0);

        params.set_output(-5.0);
        assert_eq!(params.output, 0.0);

        params.set_delta_y(250.0);
        assert_eq!(params.delta_y, 250.0);
    }
}
