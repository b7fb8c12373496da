//! Demo: transferring a classic analytical method to a UPLC column
//!
//! Scales a 150 × 4.6 mm, 5 µm method (1.0 mL/min, 20 min gradient) to a
//! 100 × 2.1 mm, 1.7 µm column and prints the adjusted method next to the
//! USP <621> compliance verdict.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example uplc_transfer
//! ```

use labchem_rs::transfer::{calculate_hplc_scaling, GradientStep, HplcColumn};

fn main() -> Result<(), String> {
    let original = HplcColumn::new(150.0, 4.6, 5.0);
    let new = HplcColumn::new(100.0, 2.1, 1.7);
    let gradient = vec![
        GradientStep::new(0.0, 5.0),
        GradientStep::new(15.0, 60.0),
        GradientStep::new(20.0, 95.0),
        GradientStep::new(22.0, 5.0),
    ];

    let result = calculate_hplc_scaling(&original, &new, 1.0, &gradient)?;

    println!("Method transfer: {} → {}", original, new);
    println!();
    println!(
        "Flow rate: 1.000 → {:.3} mL/min (×{:.3})",
        result.new_flow_rate, result.flow_rate_scale_factor
    );
    println!(
        "Gradient time scale: ×{:.3}",
        result.gradient_time_scale_factor
    );
    println!();
    println!("Gradient program:");
    for (old, scaled) in gradient.iter().zip(&result.new_gradient_table) {
        println!("  {}  →  {}", old, scaled);
    }
    println!();
    println!(
        "L/dp: {:.0} → {:.1} ({:+.1} %)",
        result.original_ldp_ratio, result.new_ldp_ratio, result.ldp_change_percent
    );
    println!(
        "USP <621> compliant: {}",
        if result.is_ldp_compliant { "yes" } else { "no — revalidate" }
    );

    Ok(())
}
