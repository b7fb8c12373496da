//! labchem-rs: Laboratory Chemistry Calculation Toolkit
//!
//! Two independent, stateless formula calculators for routine laboratory
//! chemistry work:
//!
//! 1. **HPLC method transfer** ([`transfer`]) — scale flow rate and
//!    gradient timing when a method moves between columns of different
//!    dimensions, with a USP <621> L/dp compliance check.
//! 2. **Acid solution preparation** ([`solution`]) — compute the stock
//!    volume for a target concentration and render a safety-ordered
//!    bench instruction.
//!
//! # Design
//!
//! Both calculators are pure functions over plain value types: no state,
//! no I/O, no coordination. Every fallible operation returns
//! `Result<T, String>` with a human-readable message; callers branch on
//! the `Result` before touching the payload. Two calls with identical
//! inputs always produce identical results, so the functions may be
//! invoked reentrantly from any number of threads.
//!
//! Validation is deliberately narrow: each calculator rejects only the
//! inputs that its formulas divide by (column diameter and particle size;
//! stock assay percent). Everything else — flow rates, gradient
//! compositions, densities — passes through the arithmetic as given, and
//! physically meaningless inputs surface as non-finite results rather
//! than errors.
//!
//! # Quick Start
//!
//! ```rust
//! use labchem_rs::prelude::*;
//!
//! // Transfer a 150 × 4.6 mm method to a 100 × 2.1 mm UPLC column
//! let original = HplcColumn::new(150.0, 4.6, 5.0);
//! let new = HplcColumn::new(100.0, 2.1, 1.7);
//! let gradient = vec![GradientStep::new(0.0, 5.0), GradientStep::new(20.0, 95.0)];
//!
//! let transfer = calculate_hplc_scaling(&original, &new, 1.0, &gradient)?;
//! println!("New flow rate: {:.3} mL/min", transfer.new_flow_rate);
//!
//! // Prepare 1 L of 1 M HCl from concentrated stock
//! let stock = AcidStock::new(37.0, 1.19, 36.46, 1.0);
//! let prep = prepare_acid_solution(&stock, TargetConcentration::Molarity(1.0), 1000.0)?;
//! println!("{}", prep.instructions);
//! # Ok::<(), String>(())
//! ```
//!
//! # Modules
//!
//! - [`transfer`]: HPLC method transfer (USP <621>)
//! - [`solution`]: acid solution preparation

pub mod solution;
pub mod transfer;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use labchem_rs::prelude::*;
    //! ```
    pub use crate::solution::{
        prepare_acid_solution, AcidPrepResult, AcidStock, TargetConcentration,
    };
    pub use crate::transfer::{
        calculate_hplc_scaling, scale_gradient_table, GradientStep, HplcColumn,
        HplcScalingResult,
    };
}
