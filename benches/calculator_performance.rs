//! Performance benchmarks for both calculators
//!
//! Both functions are closed-form and allocation-light; these benchmarks
//! exist to keep them that way. The transfer benchmark is parameterized on
//! gradient length, since the gradient map is the only input-proportional
//! work in the crate.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run everything
//! cargo bench --bench calculator_performance
//!
//! # Only the transfer calculator
//! cargo bench --bench calculator_performance transfer
//!
//! # Only the acid preparer
//! cargo bench --bench calculator_performance acid
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use labchem_rs::solution::{prepare_acid_solution, AcidStock, TargetConcentration};
use labchem_rs::transfer::{calculate_hplc_scaling, GradientStep, HplcColumn};

fn gradient_of_length(steps: usize) -> Vec<GradientStep> {
    (0..steps)
        .map(|i| GradientStep::new(i as f64, 5.0 + 90.0 * i as f64 / steps.max(1) as f64))
        .collect()
}

fn bench_transfer(c: &mut Criterion) {
    let original = HplcColumn::new(150.0, 4.6, 5.0);
    let new = HplcColumn::new(100.0, 2.1, 1.7);

    let mut group = c.benchmark_group("transfer");
    for steps in [2, 10, 100] {
        let gradient = gradient_of_length(steps);
        group.bench_with_input(BenchmarkId::new("scaling", steps), &gradient, |b, g| {
            b.iter(|| {
                calculate_hplc_scaling(
                    black_box(&original),
                    black_box(&new),
                    black_box(1.0),
                    black_box(g),
                )
            })
        });
    }
    group.finish();
}

fn bench_acid(c: &mut Criterion) {
    let stock = AcidStock::new(37.0, 1.19, 36.46, 1.0);

    c.bench_function("acid/preparation", |b| {
        b.iter(|| {
            prepare_acid_solution(
                black_box(&stock),
                black_box(TargetConcentration::Molarity(1.0)),
                black_box(1000.0),
            )
        })
    });
}

criterion_group!(benches, bench_transfer, bench_acid);
criterion_main!(benches);
