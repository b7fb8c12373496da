//! Gradient program representation and time scaling
//!
//! A gradient table is an ordered program of `(time, %B)` pairs driving the
//! mobile-phase composition over a run. Order is chromatographically
//! meaningful (the pump executes the steps in sequence), so every transform
//! in this module is an order- and length-preserving map.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of a gradient program.
///
/// `percent_b` is the mobile-phase B fraction at `time`. The value is not
/// range-checked here; a method editor feeding values outside \[0, 100\]
/// gets them back unchanged (scaling only touches the time axis).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradientStep {
    /// Program time \[min\]
    pub time: f64,

    /// Mobile phase B \[%\]
    pub percent_b: f64,
}

impl GradientStep {
    /// Create a gradient step.
    pub fn new(time: f64, percent_b: f64) -> Self {
        Self { time, percent_b }
    }
}

impl fmt::Display for GradientStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} min → {:.1} %B", self.time, self.percent_b)
    }
}

/// Scale a gradient table along the time axis.
///
/// Element-wise map preserving order and length:
///
/// ```text
/// time'      = time · factor
/// percent_b' = percent_b          (composition is never rescaled)
/// ```
///
/// # Example
///
/// ```rust
/// use labchem_rs::transfer::{scale_gradient_table, GradientStep};
///
/// let table = vec![GradientStep::new(0.0, 5.0), GradientStep::new(20.0, 95.0)];
/// let scaled = scale_gradient_table(&table, 0.5);
///
/// assert_eq!(scaled.len(), 2);
/// assert_eq!(scaled[1].time, 10.0);
/// assert_eq!(scaled[1].percent_b, 95.0);
/// ```
pub fn scale_gradient_table(table: &[GradientStep], factor: f64) -> Vec<GradientStep> {
    table
        .iter()
        .map(|step| GradientStep {
            time: step.time * factor,
            percent_b: step.percent_b,
        })
        .collect()
}

// ==================== Tests ====================
