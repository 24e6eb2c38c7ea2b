//! Fincalc CLI
//!
//! Command-line interface for amortization schedules and savings comparisons

use anyhow::{anyhow, Context};
use chrono::{Months, NaiveDate};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use fincalc::{
    AccelerationPolicy, AmortizationEngine, ExtraPaymentInterval, LedgerEntry, LoanTerms,
    ScenarioComparator,
};

#[derive(Parser, Debug)]
#[command(name = "fincalc", about = "Loan amortization and savings comparison")]
struct Args {
    /// Loan principal
    #[arg(long, default_value_t = 5_000_000.0)]
    principal: f64,

    /// Annual interest rate (% p.a.)
    #[arg(long, default_value_t = 8.5)]
    rate: f64,

    /// Tenure in years
    #[arg(long, default_value_t = 20.0)]
    years: f64,

    /// Pay an extra installment every N months (3, 6 or 12)
    #[arg(long)]
    extra_every: Option<u32>,

    /// Increase the installment by this percentage at each year boundary
    #[arg(long, default_value_t = 0.0)]
    step_up: f64,

    /// First payment date, used to put calendar dates on the CSV schedule
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Write the full schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// Flattened schedule row for CSV export.
#[derive(Debug, Serialize)]
struct CsvRow {
    month: u32,
    date: Option<String>,
    year: u32,
    month_in_year: u32,
    kind: &'static str,
    amount_paid: f64,
    scheduled_payment: f64,
    principal: f64,
    interest: f64,
    balance: f64,
    cumulative_interest: f64,
    cumulative_principal: f64,
    closes_loan: bool,
}

impl CsvRow {
    fn from_entry(entry: &LedgerEntry, start_date: Option<NaiveDate>) -> Self {
        let date = start_date
            .and_then(|d| d.checked_add_months(Months::new(entry.month - 1)))
            .map(|d| d.to_string());
        Self {
            month: entry.month,
            date,
            year: entry.year,
            month_in_year: entry.month_in_year,
            kind: if entry.is_extra() { "extra" } else { "regular" },
            amount_paid: entry.amount_paid,
            scheduled_payment: entry.scheduled_payment,
            principal: entry.principal_component,
            interest: entry.interest_component,
            balance: entry.balance,
            cumulative_interest: entry.cumulative_interest,
            cumulative_principal: entry.cumulative_principal,
            closes_loan: entry.closes_loan,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut policy = AccelerationPolicy {
        extra_payment_interval: None,
        annual_step_up_pct: args.step_up,
    };
    if let Some(months) = args.extra_every {
        policy.extra_payment_interval = Some(
            ExtraPaymentInterval::from_months(months)
                .ok_or_else(|| anyhow!("--extra-every must be 3, 6 or 12, got {months}"))?,
        );
    }

    let mut terms = LoanTerms::new(args.principal, args.rate, args.years);
    if policy.is_active() {
        terms = terms.with_acceleration(policy);
    }

    println!("Fincalc v0.1.0");
    println!("==============\n");
    println!("Loan: {:.2} at {}% p.a. over {} years", terms.principal, terms.annual_rate_pct, terms.tenure_years);

    let engine = AmortizationEngine::new();
    let result = engine.generate(&terms)?;
    let comparison = ScenarioComparator::new().compare(&terms)?;

    println!("  Base payment: {:.2}/month", result.base_payment);
    println!("  Closes in:    {} months ({} payment events)", comparison.accelerated.months, comparison.accelerated.payment_events);
    println!("  Total interest: {:.2}", comparison.accelerated.total_interest);
    println!("  Total paid:     {:.2}", comparison.accelerated.total_paid);

    if policy.is_active() {
        println!("\nVersus the no-acceleration baseline:");
        println!("  Baseline tenure:   {} months", comparison.baseline.months);
        println!("  Baseline interest: {:.2}", comparison.baseline.total_interest);
        println!("  Interest saved:    {:.2}", comparison.interest_saved);
        println!("  Time saved:        {} months", comparison.time_saved_months);
        println!("  Extra payments:    {}", comparison.extra_payments_made);
    }

    println!("\nSchedule (first 24 rows):");
    println!(
        "{:>5} {:>4} {:>4} {:>8} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Yr", "MiY", "Type", "Paid", "Principal", "Interest", "Balance"
    );
    println!("{}", "-".repeat(90));
    for entry in result.entries.iter().take(24) {
        println!(
            "{:>5} {:>4} {:>4} {:>8} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
            entry.month,
            entry.year,
            entry.month_in_year,
            if entry.is_extra() { "extra" } else { "regular" },
            entry.amount_paid,
            entry.principal_component,
            entry.interest_component,
            entry.balance,
        );
    }
    if result.entries.len() > 24 {
        println!("... ({} more rows)", result.entries.len() - 24);
    }

    if let Some(path) = &args.csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        for entry in &result.entries {
            writer.serialize(CsvRow::from_entry(entry, args.start_date))?;
        }
        writer.flush().context("flushing schedule CSV")?;
        println!("\nFull schedule written to: {}", path.display());
    }

    Ok(())
}
