//! Acid dilution from a concentrated stock
//!
//! # Mathematical Background
//!
//! ## Stock Molarity
//!
//! A commercial acid is labelled as mass percent and density. Its molarity
//! follows from the standard %w/w → mol/L conversion:
//!
//! ```text
//! M_stock = (P · ρ · 10) / MW
//! ```
//!
//! Where:
//! - **P** : Assay [% w/w]
//! - **ρ** : Density [g/mL]
//! - **MW** : Molar mass [g/mol]
//!
//! The factor 10 converts g per 100 mL (percent × density) into g/L.
//!
//! ## Normality
//!
//! Polyprotic acids are often specified in normality (equivalents/L). With
//! basicity *n* (dissociable protons per molecule):
//!
//! ```text
//! M_target = N_target / n
//! ```
//!
//! ## Dilution
//!
//! The classic dilution equation C₁V₁ = C₂V₂ solved for the stock volume:
//!
//! ```text
//! V_stock = (M_target · V_final) / M_stock
//! ```
//!
//! # Safety Ordering
//!
//! The generated instruction always charges water first (~60 % of the
//! final volume) and adds the acid slowly to it, never the reverse.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction of the final volume charged as water before the acid goes in.
const INITIAL_WATER_FRACTION: f64 = 0.6;

/// Label properties of a concentrated acid stock.
///
/// These are read straight off the reagent bottle. None of the fields is
/// range-checked except the assay percent, which
/// [`prepare_acid_solution`] validates against (0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcidStock {
    /// Assay \[% w/w\]
    pub percent_ww: f64,

    /// Density \[g/mL\]
    pub density_g_ml: f64,

    /// Molar mass \[g/mol\]
    pub molar_mass: f64,

    /// Dissociable protons per molecule (1 for HCl, 2 for H₂SO₄, ...)
    pub basicity: f64,
}

impl AcidStock {
    /// Create a stock description from bottle-label values.
    pub fn new(percent_ww: f64, density_g_ml: f64, molar_mass: f64, basicity: f64) -> Self {
        Self {
            percent_ww,
            density_g_ml,
            molar_mass,
            basicity,
        }
    }

    /// Stock molarity \[mol/L\] via the %w/w → mol/L conversion.
    pub fn molarity(&self) -> f64 {
        (self.percent_ww * self.density_g_ml * 10.0) / self.molar_mass
    }
}

/// Target concentration of the solution to prepare.
///
/// Normality is converted to molarity with the stock's basicity before the
/// dilution equation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetConcentration {
    /// mol/L
    Molarity(f64),

    /// equivalents/L
    Normality(f64),
}

impl TargetConcentration {
    /// Express the target in mol/L.
    pub fn as_molarity(&self, basicity: f64) -> f64 {
        match *self {
            TargetConcentration::Molarity(m) => m,
            TargetConcentration::Normality(n) => n / basicity,
        }
    }
}

/// Derived snapshot of a preparation.
///
/// Immutable, fully determined by the inputs of the call that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcidPrepResult {
    /// Computed stock molarity \[mol/L\]
    pub stock_molarity: f64,

    /// Volume of stock to measure \[mL\]
    pub volume_needed_ml: f64,

    /// Human-readable, safety-ordered preparation instruction
    pub instructions: String,
}

/// Compute the stock volume needed to prepare a diluted acid solution.
///
/// Pure function: no state, no side effects, reentrant from any number of
/// threads. Two calls with identical inputs produce identical results.
///
/// # Errors
///
/// - `"Invalid stock concentration."` when the assay percent is outside
///   (0, 100].
/// - `"Target exceeds stock concentration."` when the requested molarity is
///   higher than the stock's (dilution cannot concentrate).
///
/// Density, molar mass, basicity, and final volume are accepted as-is; a
/// zero molar mass or basicity surfaces as non-finite arithmetic rather
/// than an error, matching the permissive input contract.
///
/// # Example
///
/// ```rust
/// use labchem_rs::solution::{prepare_acid_solution, AcidStock, TargetConcentration};
///
/// // 1 M HCl, 1 L, from concentrated stock (37 %, 1.19 g/mL, 36.46 g/mol)
/// let stock = AcidStock::new(37.0, 1.19, 36.46, 1.0);
/// let result =
///     prepare_acid_solution(&stock, TargetConcentration::Molarity(1.0), 1000.0).unwrap();
///
/// assert!((result.stock_molarity - 12.08).abs() < 0.01);
/// assert!(result.instructions.contains("mL water"));
/// ```
pub fn prepare_acid_solution(
    stock: &AcidStock,
    target: TargetConcentration,
    final_volume_ml: f64,
) -> Result<AcidPrepResult, String> {
    if stock.percent_ww <= 0.0 || stock.percent_ww > 100.0 {
        return Err("Invalid stock concentration.".to_string());
    }

    let stock_molarity = stock.molarity();
    let target_molarity = target.as_molarity(stock.basicity);

    if target_molarity > stock_molarity {
        return Err("Target exceeds stock concentration.".to_string());
    }

    let volume_needed_ml = (target_molarity * final_volume_ml) / stock_molarity;

    let instructions = format!(
        "Measure {:.1} mL of acid. Add slowly to ~{:.0} mL water. Dilute to {:.0} mL.",
        volume_needed_ml,
        final_volume_ml * INITIAL_WATER_FRACTION,
        final_volume_ml
    );

    Ok(AcidPrepResult {
        stock_molarity,
        volume_needed_ml,
        instructions,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
