//! HPLC method transfer (USP <621>)
//!
//! This module scales an HPLC method — flow rate and gradient timing —
//! when it moves between columns of different dimensions, and reports
//! whether the geometry change stays inside the USP <621> L/dp window.
//!
//! # Core Concepts
//!
//! - **Column** ([`HplcColumn`]): the three label dimensions of a column
//! - **Gradient table** (`Vec<`[`GradientStep`]`>`): the ordered pump program
//! - **Transfer** ([`calculate_hplc_scaling`]): one pure call producing a
//!   [`HplcScalingResult`] snapshot
//!
//! # Quick Start
//!
//! ```rust
//! use labchem_rs::transfer::{calculate_hplc_scaling, GradientStep, HplcColumn};
//!
//! // Transfer a classic analytical method to a UPLC column
//! let original = HplcColumn::new(150.0, 4.6, 5.0);
//! let new = HplcColumn::new(100.0, 2.1, 1.7);
//! let gradient = vec![GradientStep::new(0.0, 5.0), GradientStep::new(20.0, 95.0)];
//!
//! match calculate_hplc_scaling(&original, &new, 1.0, &gradient) {
//!     Ok(result) => {
//!         println!("New flow rate: {:.3} mL/min", result.new_flow_rate);
//!         println!("USP <621> compliant: {}", result.is_ldp_compliant);
//!     }
//!     Err(e) => eprintln!("Transfer failed: {}", e),
//! }
//! ```
//!
//! # Error Handling
//!
//! [`calculate_hplc_scaling`] returns `Result<HplcScalingResult, String>`.
//! The only rejected input is a column with non-positive diameter or
//! particle size; everything else is computed permissively (see the
//! `scaling` module docs).

mod column;
mod gradient;
mod scaling;

pub use column::HplcColumn;
pub use gradient::{scale_gradient_table, GradientStep};
pub use scaling::{
    calculate_hplc_scaling, HplcScalingResult, LDP_CHANGE_LOWER_PERCENT,
    LDP_CHANGE_UPPER_PERCENT,
};
