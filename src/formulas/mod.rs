//! Closed-form interest and installment formulas
//!
//! Every function here is pure: rates are annual fractions (0.05 for 5%) and
//! terms are in months, converted to years as `months / 12`.

mod interest;
mod loan;

pub use interest::{continuous_compound, periodic_compound, simple_interest, InterestResult};
pub use loan::loan_installment;

/// Months per year, used for both the year conversion and the monthly rate
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert a term in months to fractional years
#[inline]
pub fn months_to_years(t_months: u32) -> f64 {
    t_months as f64 / MONTHS_PER_YEAR
}

/// Round to 2 decimal places (half away from zero) for display
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
