//! Worked examples through the public API

use approx::{assert_abs_diff_eq, assert_relative_eq};
use interest_calculator::report::format_amount;
use interest_calculator::{
    amortization_schedule, continuous_compound, loan_installment, periodic_compound,
    simple_interest, CalculationMode, CalculationOutcome, CalculationRequest,
};

#[test]
fn one_year_at_six_percent() {
    let simple = simple_interest(10_000.0, 0.06, 12);
    assert_eq!(format_amount(simple.interest), "600.00");
    assert_eq!(format_amount(simple.amount), "10,600.00");

    let monthly = periodic_compound(10_000.0, 0.06, 12, 12);
    assert_eq!(format_amount(monthly.amount), "10,616.78");

    let continuous = continuous_compound(10_000.0, 0.06, 12);
    assert_eq!(format_amount(continuous.amount), "10,618.37");

    assert!(simple.amount < monthly.amount);
    assert!(monthly.amount < continuous.amount);
}

#[test]
fn daily_and_hourly_compounding_approach_continuous() {
    let continuous = continuous_compound(50_000.0, 0.08, 120).amount;
    let daily = periodic_compound(50_000.0, 0.08, 120, 365).amount;
    let hourly = periodic_compound(50_000.0, 0.08, 120, 8760).amount;
    assert_relative_eq!(daily, continuous, max_relative = 2e-4);
    assert_relative_eq!(hourly, continuous, max_relative = 1e-5);
}

#[test]
fn thirty_year_mortgage() {
    let pmt = loan_installment(100_000.0, 0.05, 360);
    assert_eq!(format_amount(pmt), "536.82");

    let schedule = amortization_schedule(100_000.0, 0.05, 360);
    assert_eq!(schedule.len(), 360);

    let last = schedule.rows()[359];
    assert_eq!(last.month, 360);
    assert_eq!(format_amount(last.balance), "0.00");

    assert_abs_diff_eq!(schedule.total_principal(), 100_000.0, epsilon = 0.005);
    // 360 * 536.82 - 100000
    assert_abs_diff_eq!(schedule.total_interest(), 93_255.78, epsilon = 1.0);
}

#[test]
fn loan_edge_cases() {
    assert_eq!(loan_installment(9_000.0, 0.0, 36), 250.0);
    assert_eq!(loan_installment(9_000.0, 0.07, 0), 9_000.0);
}

#[test]
fn every_mode_dispatches() {
    for mode in CalculationMode::ALL {
        let mut request = CalculationRequest::new(mode, 20_000.0, 4.5, 48);
        if mode == CalculationMode::PeriodicCompound {
            request = request.with_frequency(4);
        }
        let outcome = request.into_calculation().unwrap().run(120);

        assert_eq!(outcome.mode(), mode);
        assert_eq!(outcome.values().len(), mode.result_labels().len());
        match outcome {
            CalculationOutcome::Interest { growth, result, .. } => {
                assert_eq!(growth.len(), 48);
                assert_eq!(growth.last().unwrap().amount, result.amount);
                assert!(result.amount > 20_000.0);
            }
            CalculationOutcome::Loan { schedule, .. } => {
                assert_eq!(schedule.len(), 48);
                assert_eq!(schedule.final_balance(), 0.0);
            }
        }
    }
}
