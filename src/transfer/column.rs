//! HPLC column geometry
//!
//! A column is described by the three dimensions that drive USP <621>
//! method transfer: length, internal diameter, and particle size.
//!
//! # Units
//!
//! - **Length** : millimetres \[mm\]
//! - **Internal diameter** : millimetres \[mm\]
//! - **Particle size** : micrometres \[µm\]
//!
//! These are the units printed on the column label (e.g. "150 × 4.6 mm,
//! 5 µm"), so callers can transcribe hardware specifications directly.
//!
//! # L/dp Ratio
//!
//! The ratio of column length to particle diameter:
//!
//! ```text
//! L/dp = (length [mm] · 1000) / particle size [µm]
//! ```
//!
//! USP <621> permits transferring a method between columns as long as the
//! change in L/dp stays within -25 % to +50 % of the original. The ratio
//! itself is computed here; the compliance window lives in
//! [`scaling`](crate::transfer).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// HPLC column dimensions
///
/// Plain value type constructed by the caller per calculation. Columns are
/// never persisted and carry no identity beyond their dimensions.
///
/// # Example
///
/// ```rust
/// use labchem_rs::transfer::HplcColumn;
///
/// // Classic analytical column: 150 × 4.6 mm, 5 µm
/// let column = HplcColumn::new(150.0, 4.6, 5.0);
/// assert_eq!(column.ldp_ratio(), 30_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HplcColumn {
    /// Column length \[mm\]
    pub length_mm: f64,

    /// Internal diameter \[mm\]
    pub diameter_mm: f64,

    /// Stationary-phase particle size \[µm\]
    pub particle_size_um: f64,
}

impl HplcColumn {
    /// Create a column from its label dimensions.
    pub fn new(length_mm: f64, diameter_mm: f64, particle_size_um: f64) -> Self {
        Self {
            length_mm,
            diameter_mm,
            particle_size_um,
        }
    }

    /// Check the dimensions used as divisors during scaling.
    ///
    /// Diameter and particle size must be strictly positive; both appear in
    /// denominators of the transfer formulas. Length is deliberately not
    /// checked here, matching the validation contract of
    /// [`calculate_hplc_scaling`](crate::transfer::calculate_hplc_scaling).
    pub fn has_valid_dimensions(&self) -> bool {
        self.diameter_mm > 0.0 && self.particle_size_um > 0.0
    }

    /// Length-to-particle-diameter ratio (dimensionless).
    ///
    /// ```text
    /// L/dp = (length_mm · 1000) / particle_size_um
    /// ```
    ///
    /// The factor 1000 converts column length from mm to µm so both terms
    /// share a unit.
    pub fn ldp_ratio(&self) -> f64 {
        (self.length_mm * 1000.0) / self.particle_size_um
    }

    /// Geometric volume term `L · d²` \[mm³\] used in the gradient
    /// time-scaling volume ratio.
    ///
    /// The constant factor π/4 cancels in the ratio of two columns, so it
    /// is omitted.
    pub(crate) fn volume_term(&self) -> f64 {
        self.length_mm * self.diameter_mm.powi(2)
    }
}

impl fmt::Display for HplcColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × {} mm, {} µm",
            self.length_mm, self.diameter_mm, self.particle_size_um
        )
    }
}

// ==================== Tests ====================
