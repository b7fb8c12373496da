//! Demo: preparing 1 L of 1 M HCl from concentrated stock
//!
//! Run with:
//!
//! ```bash
//! cargo run --example hcl_dilution
//! ```

use labchem_rs::solution::{prepare_acid_solution, AcidStock, TargetConcentration};

fn main() -> Result<(), String> {
    // Bottle label: 37 % w/w, 1.19 g/mL, MW 36.46 g/mol, monoprotic
    let stock = AcidStock::new(37.0, 1.19, 36.46, 1.0);

    let result = prepare_acid_solution(&stock, TargetConcentration::Molarity(1.0), 1000.0)?;

    println!("Stock molarity: {:.2} mol/L", result.stock_molarity);
    println!("Stock volume needed: {:.1} mL", result.volume_needed_ml);
    println!();
    println!("{}", result.instructions);

    Ok(())
}
