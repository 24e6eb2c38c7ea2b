//! Sweep the acceleration policy grid for a single loan
//!
//! Runs every extra-payment interval and step-up combination in parallel and
//! tabulates the savings, for comparing payoff strategies side by side.

use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use fincalc::{
    AccelerationPolicy, ExtraPaymentInterval, LoanTerms, ScenarioComparator, ScenarioComparison,
};

const STEP_UPS: [f64; 5] = [0.0, 5.0, 10.0, 15.0, 20.0];
const INTERVALS: [Option<ExtraPaymentInterval>; 4] = [
    None,
    Some(ExtraPaymentInterval::Quarterly),
    Some(ExtraPaymentInterval::HalfYearly),
    Some(ExtraPaymentInterval::Yearly),
];

/// One cell of the sweep output.
#[derive(Debug, Serialize)]
struct SweepRow {
    extra_every_months: Option<u32>,
    step_up_pct: f64,
    months: u32,
    total_interest: f64,
    interest_saved: f64,
    time_saved_months: u32,
    extra_payments: u32,
}

impl SweepRow {
    fn new(policy: &AccelerationPolicy, comparison: &ScenarioComparison) -> Self {
        Self {
            extra_every_months: policy.extra_payment_interval.map(|i| i.months()),
            step_up_pct: policy.annual_step_up_pct,
            months: comparison.accelerated.months,
            total_interest: comparison.accelerated.total_interest,
            interest_saved: comparison.interest_saved,
            time_saved_months: comparison.time_saved_months,
            extra_payments: comparison.extra_payments_made,
        }
    }
}

fn main() {
    env_logger::init();

    let terms = LoanTerms::new(5_000_000.0, 8.5, 20.0);
    println!(
        "Sweeping acceleration policies for {:.0} at {}% over {} years...",
        terms.principal, terms.annual_rate_pct, terms.tenure_years
    );

    let grid: Vec<AccelerationPolicy> = INTERVALS
        .iter()
        .flat_map(|&interval| {
            STEP_UPS.iter().map(move |&step_up| AccelerationPolicy {
                extra_payment_interval: interval,
                annual_step_up_pct: step_up,
            })
        })
        .collect();

    let start = Instant::now();
    let comparator = ScenarioComparator::new();

    // Each cell is an independent pure computation
    let results: Vec<(AccelerationPolicy, Option<ScenarioComparison>)> = grid
        .par_iter()
        .map(|policy| {
            let cell_terms = terms.clone().with_acceleration(*policy);
            match comparator.compare(&cell_terms) {
                Ok(comparison) => (*policy, Some(comparison)),
                Err(err) => {
                    log::warn!("policy {:?} failed: {}", policy, err);
                    (*policy, None)
                }
            }
        })
        .collect();

    println!("{} cells in {:?}\n", results.len(), start.elapsed());

    println!(
        "{:>12} {:>8} {:>7} {:>16} {:>16} {:>11} {:>7}",
        "ExtraEvery", "StepUp%", "Months", "TotalInterest", "InterestSaved", "TimeSaved", "Extras"
    );
    println!("{}", "-".repeat(84));
    for (policy, comparison) in &results {
        let Some(c) = comparison else { continue };
        println!(
            "{:>12} {:>8.1} {:>7} {:>16.2} {:>16.2} {:>11} {:>7}",
            policy
                .extra_payment_interval
                .map(|i| i.months().to_string())
                .unwrap_or_else(|| "-".into()),
            policy.annual_step_up_pct,
            c.accelerated.months,
            c.accelerated.total_interest,
            c.interest_saved,
            c.time_saved_months,
            c.extra_payments_made,
        );
    }

    // Full grid to CSV for spreadsheet comparison
    let output_path = "policy_sweep.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    for (policy, comparison) in &results {
        if let Some(c) = comparison {
            writer
                .serialize(SweepRow::new(policy, c))
                .expect("Failed to write sweep row");
        }
    }
    writer.flush().expect("Failed to flush sweep CSV");
    println!("\nSweep written to: {}", output_path);
}
