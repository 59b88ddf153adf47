//! Amortization schedule builder and chart series

use serde::{Deserialize, Serialize};

use crate::formulas::{loan_installment, round_to_cents, MONTHS_PER_YEAR};

/// Rows reserved up front; longer schedules grow the vector as they go
const PREALLOCATED_ROWS: u32 = 1_200;

/// One month of a repayment schedule, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment month (1-indexed)
    pub month: u32,
    /// Fixed installment paid this month
    pub installment: f64,
    /// Portion of the installment that is interest
    pub interest: f64,
    /// Portion of the installment that repays principal
    pub principal: f64,
    /// Outstanding balance after this month's payment
    pub balance: f64,
}

/// Full repayment ledger for a fixed-installment loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Unrounded installment used to build every row
    pub installment: f64,
    rows: Vec<AmortizationRow>,
    // Running totals kept at full precision so they do not carry
    // per-row rounding error
    total_interest: f64,
    total_principal: f64,
}

impl AmortizationSchedule {
    pub fn rows(&self) -> &[AmortizationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Balance on the last row (0.0 for any non-empty schedule)
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map(|r| r.balance).unwrap_or(0.0)
    }

    /// Total interest paid over the life of the loan
    pub fn total_interest(&self) -> f64 {
        round_to_cents(self.total_interest)
    }

    /// Total principal repaid; equals the original principal
    pub fn total_principal(&self) -> f64 {
        round_to_cents(self.total_principal)
    }

    /// Sum of all installments
    pub fn total_paid(&self) -> f64 {
        round_to_cents(self.total_interest + self.total_principal)
    }

    /// (month, interest, principal) per row, for an interest-vs-principal chart
    pub fn interest_principal_series(&self) -> Vec<(u32, f64, f64)> {
        self.rows
            .iter()
            .map(|r| (r.month, r.interest, r.principal))
            .collect()
    }

    /// (month, remaining balance) per row
    pub fn balance_series(&self) -> Vec<(u32, f64)> {
        self.rows.iter().map(|r| (r.month, r.balance)).collect()
    }
}

/// Build the month-by-month schedule for a loan
///
/// The installment is computed once with [`loan_installment`]. Each month
/// interest accrues on the outstanding balance and the rest of the
/// installment reduces it. On the final month, or whenever floating-point
/// drift pushes the balance below zero, the residual is folded into that
/// month's principal and the balance is forced to exactly zero.
pub fn amortization_schedule(
    principal: f64,
    annual_rate: f64,
    t_months: u32,
) -> AmortizationSchedule {
    let monthly_rate = annual_rate / MONTHS_PER_YEAR;
    let installment = loan_installment(principal, annual_rate, t_months);

    let mut rows = Vec::with_capacity(t_months.min(PREALLOCATED_ROWS) as usize);
    let mut balance = principal;
    let mut total_interest = 0.0;
    let mut total_principal = 0.0;

    for month in 1..=t_months {
        let interest_paid = balance * monthly_rate;
        let mut principal_paid = installment - interest_paid;
        balance -= principal_paid;

        if month == t_months || balance < 0.0 {
            if month != t_months {
                log::debug!(
                    "Balance went negative ({:.6}) at month {} of {}; closing out early",
                    balance, month, t_months
                );
            }
            principal_paid += balance;
            balance = 0.0;
        }

        total_interest += interest_paid;
        total_principal += principal_paid;

        rows.push(AmortizationRow {
            month,
            installment: round_to_cents(installment),
            interest: round_to_cents(interest_paid),
            principal: round_to_cents(principal_paid),
            balance: round_to_cents(balance),
        });
    }

    log::debug!(
        "Built {}-month schedule: installment={:.2}, total interest={:.2}",
        t_months, installment, total_interest
    );

    AmortizationSchedule {
        installment,
        rows,
        total_interest,
        total_principal,
    }
}
