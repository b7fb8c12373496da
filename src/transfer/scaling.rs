//! USP <621> method transfer between column geometries
//!
//! # Mathematical Background
//!
//! ## Flow Rate Scaling
//!
//! When a method moves to a column of different internal diameter and
//! particle size, the flow rate is adjusted to preserve linear velocity
//! relative to particle size:
//!
//! ```text
//! F₂ = F₁ · (d₂/d₁)² · (dp₁/dp₂)
//! ```
//!
//! Where:
//! - **F** : Flow rate [mL/min]
//! - **d** : Column internal diameter [mm]
//! - **dp** : Particle size [µm]
//!
//! ## Gradient Time Scaling
//!
//! Gradient step times scale with the number of column volumes delivered
//! per unit time, so every step sees the same volume fraction of the run:
//!
//! ```text
//! t₂ = t₁ · (F₁/F₂) · (L₂·d₂²)/(L₁·d₁²)
//! ```
//!
//! The composition axis (%B) is never rescaled.
//!
//! ## L/dp Compliance Window
//!
//! USP <621> allows the length-to-particle-diameter ratio to change by
//! -25 % to +50 % (inclusive) without revalidation:
//!
//! ```text
//! -25 ≤ (L/dp₂ − L/dp₁)/(L/dp₁) · 100 ≤ +50
//! ```
//!
//! A transfer outside the window still computes; it is reported as
//! non-compliant rather than rejected, since the chromatographer may be
//! doing a deliberate redevelopment rather than an equivalence transfer.
//!
//! # Validation Contract
//!
//! Diameter and particle size of both columns must be strictly positive
//! (they are divisors). Length, flow rate, and gradient values are
//! deliberately unvalidated: a zero or negative flow rate flows through
//! the arithmetic and surfaces as non-finite scale factors, which is the
//! caller's signal that the inputs were physically meaningless.

use super::column::HplcColumn;
use super::gradient::{scale_gradient_table, GradientStep};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =================================================================================================
// USP <621> Compliance Window
// =================================================================================================

/// Lower bound of the allowed L/dp change \[%\], inclusive.
pub const LDP_CHANGE_LOWER_PERCENT: f64 = -25.0;

/// Upper bound of the allowed L/dp change \[%\], inclusive.
pub const LDP_CHANGE_UPPER_PERCENT: f64 = 50.0;

// =================================================================================================
// Result Snapshot
// =================================================================================================

/// Derived snapshot of a method transfer.
///
/// Immutable, fully determined by the inputs of the call that produced it.
/// The new gradient table has the same length and order as the original;
/// only the time axis differs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HplcScalingResult {
    /// Adjusted flow rate \[mL/min\]
    pub new_flow_rate: f64,

    /// Time-scaled gradient program (%B unchanged)
    pub new_gradient_table: Vec<GradientStep>,

    /// `new_flow_rate / original_flow_rate`
    pub flow_rate_scale_factor: f64,

    /// Factor applied to every gradient step time
    pub gradient_time_scale_factor: f64,

    /// L/dp of the original column
    pub original_ldp_ratio: f64,

    /// L/dp of the new column
    pub new_ldp_ratio: f64,

    /// Relative L/dp change \[%\]
    pub ldp_change_percent: f64,

    /// Whether the change sits inside the USP <621> window
    pub is_ldp_compliant: bool,
}

// =================================================================================================
// Calculator
// =================================================================================================

/// Scale an HPLC method from one column geometry to another.
///
/// Pure function: no state, no side effects, reentrant from any number of
/// threads. Two calls with identical inputs produce identical results.
///
/// # Errors
///
/// Returns `Err("Invalid column dimensions.")` when either column has a
/// non-positive diameter or particle size. All other inputs are accepted
/// as-is (see module docs for the rationale).
///
/// # Example
///
/// ```rust
/// use labchem_rs::transfer::{calculate_hplc_scaling, GradientStep, HplcColumn};
///
/// let original = HplcColumn::new(150.0, 4.6, 5.0);
/// let new = HplcColumn::new(100.0, 2.1, 1.7);
/// let gradient = vec![GradientStep::new(0.0, 5.0), GradientStep::new(20.0, 95.0)];
///
/// let result = calculate_hplc_scaling(&original, &new, 1.0, &gradient).unwrap();
///
/// assert_eq!(result.new_gradient_table.len(), 2);
/// assert_eq!(result.original_ldp_ratio, 30_000.0);
/// ```
pub fn calculate_hplc_scaling(
    original_column: &HplcColumn,
    new_column: &HplcColumn,
    original_flow_rate: f64,
    original_gradient_table: &[GradientStep],
) -> Result<HplcScalingResult, String> {
    if !original_column.has_valid_dimensions() || !new_column.has_valid_dimensions() {
        return Err("Invalid column dimensions.".to_string());
    }

    // USP <621> flow rate scaling
    let diameter_ratio_sq = (new_column.diameter_mm / original_column.diameter_mm).powi(2);
    let particle_ratio = original_column.particle_size_um / new_column.particle_size_um;

    let new_flow_rate = original_flow_rate * diameter_ratio_sq * particle_ratio;

    // Gradient time scaling: column volumes per unit time must match
    let volume_ratio = new_column.volume_term() / original_column.volume_term();
    let flow_ratio = original_flow_rate / new_flow_rate;
    let time_scale_factor = flow_ratio * volume_ratio;

    let new_gradient_table = scale_gradient_table(original_gradient_table, time_scale_factor);

    // L/dp compliance window check
    let original_ldp = original_column.ldp_ratio();
    let new_ldp = new_column.ldp_ratio();
    let ldp_change = ((new_ldp - original_ldp) / original_ldp) * 100.0;

    let is_compliant =
        ldp_change >= LDP_CHANGE_LOWER_PERCENT && ldp_change <= LDP_CHANGE_UPPER_PERCENT;

    Ok(HplcScalingResult {
        new_flow_rate,
        new_gradient_table,
        flow_rate_scale_factor: new_flow_rate / original_flow_rate,
        gradient_time_scale_factor: time_scale_factor,
        original_ldp_ratio: original_ldp,
        new_ldp_ratio: new_ldp,
        ldp_change_percent: ldp_change,
        is_ldp_compliant: is_compliant,
    })
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_gradient() -> Vec<GradientStep> {
        vec![GradientStep::new(0.0, 5.0), GradientStep::new(20.0, 95.0)]
    }

    #[test]
    fn test_identity_transfer() {
        let column = HplcColumn::new(150.0, 4.6, 5.0);
        let gradient = classic_gradient();

        let result = calculate_hplc_scaling(&column, &column, 1.0, &gradient).unwrap();

        assert_eq!(result.flow_rate_scale_factor, 1.0);
        assert_eq!(result.gradient_time_scale_factor, 1.0);
        assert_eq!(result.ldp_change_percent, 0.0);
        assert!(result.is_ldp_compliant);
        assert_eq!(result.new_gradient_table, gradient);
    }

    #[test]
    fn test_flow_rate_formula() {
        let original = HplcColumn::new(150.0, 4.6, 5.0);
        let new = HplcColumn::new(100.0, 2.1, 1.7);

        let result = calculate_hplc_scaling(&original, &new, 1.0, &classic_gradient()).unwrap();

        let expected = 1.0 * (2.1f64 / 4.6).powi(2) * (5.0 / 1.7);
        assert!((result.new_flow_rate - expected).abs() < 1e-12);
        assert!((result.flow_rate_scale_factor - expected).abs() < 1e-12);
    }

    #[test]
    fn test_gradient_times_share_one_factor() {
        let original = HplcColumn::new(150.0, 4.6, 5.0);
        let new = HplcColumn::new(100.0, 2.1, 1.7);
        let gradient = vec![
            GradientStep::new(0.0, 5.0),
            GradientStep::new(5.0, 30.0),
            GradientStep::new(20.0, 95.0),
        ];

        let result = calculate_hplc_scaling(&original, &new, 1.0, &gradient).unwrap();
        let factor = result.gradient_time_scale_factor;

        assert_eq!(result.new_gradient_table.len(), gradient.len());
        for (step, scaled) in gradient.iter().zip(&result.new_gradient_table) {
            assert!((scaled.time - step.time * factor).abs() < 1e-12);
            assert_eq!(scaled.percent_b, step.percent_b);
        }
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let good = HplcColumn::new(150.0, 4.6, 5.0);
        let bad = HplcColumn::new(150.0, 0.0, 5.0);

        let result = calculate_hplc_scaling(&good, &bad, 1.0, &classic_gradient());
        assert_eq!(result.unwrap_err(), "Invalid column dimensions.");

        let result = calculate_hplc_scaling(&bad, &good, 1.0, &classic_gradient());
        assert_eq!(result.unwrap_err(), "Invalid column dimensions.");
    }

    #[test]
    fn test_compliance_window_is_inclusive() {
        let original = HplcColumn::new(100.0, 4.6, 5.0); // L/dp = 20_000

        // +50 % exactly: L/dp = 30_000
        let upper = HplcColumn::new(150.0, 4.6, 5.0);
        let result = calculate_hplc_scaling(&original, &upper, 1.0, &[]).unwrap();
        assert_eq!(result.ldp_change_percent, 50.0);
        assert!(result.is_ldp_compliant);

        // -25 % exactly: L/dp = 15_000
        let lower = HplcColumn::new(75.0, 4.6, 5.0);
        let result = calculate_hplc_scaling(&original, &lower, 1.0, &[]).unwrap();
        assert_eq!(result.ldp_change_percent, -25.0);
        assert!(result.is_ldp_compliant);
    }

    #[test]
    fn test_just_outside_window_is_non_compliant() {
        let original = HplcColumn::new(100.0, 4.6, 5.0);

        let above = HplcColumn::new(150.01, 4.6, 5.0);
        let result = calculate_hplc_scaling(&original, &above, 1.0, &[]).unwrap();
        assert!(!result.is_ldp_compliant);

        let below = HplcColumn::new(74.99, 4.6, 5.0);
        let result = calculate_hplc_scaling(&original, &below, 1.0, &[]).unwrap();
        assert!(!result.is_ldp_compliant);
    }

    #[test]
    fn test_zero_flow_rate_propagates() {
        // Deliberately permissive: a zero flow rate is not rejected, the
        // non-finite factors are the caller's signal.
        let original = HplcColumn::new(150.0, 4.6, 5.0);
        let new = HplcColumn::new(100.0, 2.1, 1.7);

        let result = calculate_hplc_scaling(&original, &new, 0.0, &classic_gradient()).unwrap();
        assert_eq!(result.new_flow_rate, 0.0);
        assert!(!result.gradient_time_scale_factor.is_finite());
    }
}
