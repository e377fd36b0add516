//! Scenario Evaluation Benchmarks
//!
//! The engine runs on every keystroke, so a full evaluation should stay cheap.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use downpay_core::prelude::*;

/// Benchmark a single amortization payment
fn bench_monthly_payment(c: &mut Criterion) {
    c.bench_function("monthly_payment_30y", |b| {
        b.iter(|| monthly_payment(black_box(360_000.0), black_box(7.5), black_box(30)));
    });
}

/// Benchmark the three-scenario evaluation across loan types
fn bench_evaluate_scenarios(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_scenarios");

    for loan_type in LoanType::ALL {
        let terms = LoanTerms::for_loan_type(loan_type);
        group.bench_with_input(
            BenchmarkId::new("loan_type", loan_type.code()),
            &loan_type,
            |b, &loan_type| {
                b.iter(|| {
                    evaluate_scenarios(
                        black_box(450_000.0),
                        black_box(DownPaymentSpec::percentage(12.5)),
                        loan_type,
                        terms,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_monthly_payment, bench_evaluate_scenarios);
criterion_main!(benches);
