//! Acid solution preparation
//!
//! This module computes how much concentrated acid stock to measure when
//! preparing a diluted solution of a target concentration, and renders the
//! result as a safety-ordered bench instruction (water first, acid added
//! slowly).
//!
//! # Core Concepts
//!
//! - **Stock** ([`AcidStock`]): bottle-label properties of the concentrate
//! - **Target** ([`TargetConcentration`]): molarity or normality to prepare
//! - **Preparation** ([`prepare_acid_solution`]): one pure call producing an
//!   [`AcidPrepResult`] snapshot
//!
//! # Quick Start
//!
//! ```rust
//! use labchem_rs::solution::{prepare_acid_solution, AcidStock, TargetConcentration};
//!
//! let stock = AcidStock::new(37.0, 1.19, 36.46, 1.0);
//! match prepare_acid_solution(&stock, TargetConcentration::Molarity(1.0), 1000.0) {
//!     Ok(result) => println!("{}", result.instructions),
//!     Err(e) => eprintln!("Preparation failed: {}", e),
//! }
//! ```

mod acid;

pub use acid::{prepare_acid_solution, AcidPrepResult, AcidStock, TargetConcentration};
