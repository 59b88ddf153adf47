//! Simple, periodic and continuous interest accrual

use serde::{Deserialize, Serialize};

use super::months_to_years;

/// Interest accrued over a term and the resulting final amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    /// Amount earned on top of the principal
    pub interest: f64,
    /// Principal plus interest at the end of the term
    pub amount: f64,
}

impl InterestResult {
    fn from_amount(principal: f64, amount: f64) -> Self {
        Self {
            interest: amount - principal,
            amount,
        }
    }
}

/// Simple interest: A = P(1 + rt)
///
/// Interest accrues on the principal only, so growth is linear in the term.
pub fn simple_interest(principal: f64, annual_rate: f64, t_months: u32) -> InterestResult {
    let t_years = months_to_years(t_months);
    let amount = principal * (1.0 + annual_rate * t_years);
    InterestResult::from_amount(principal, amount)
}

/// Periodic compounding: A = P(1 + r/m)^(mt)
///
/// `frequency` is the number of compounding periods per year (12 for
/// monthly, 365 for daily). A zero-length term returns the principal
/// untouched without evaluating the power.
pub fn periodic_compound(
    principal: f64,
    annual_rate: f64,
    t_months: u32,
    frequency: u32,
) -> InterestResult {
    let t_years = months_to_years(t_months);
    if t_years == 0.0 {
        return InterestResult {
            interest: 0.0,
            amount: principal,
        };
    }

    let m = frequency as f64;
    let amount = principal * (1.0 + annual_rate / m).powf(m * t_years);
    InterestResult::from_amount(principal, amount)
}

/// Continuous compounding: A = Pe^(rt)
pub fn continuous_compound(principal: f64, annual_rate: f64, t_months: u32) -> InterestResult {
    let t_years = months_to_years(t_months);
    let amount = principal * (annual_rate * t_years).exp();
    InterestResult::from_amount(principal, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_simple_interest_one_year() {
        let result = simple_interest(10_000.0, 0.06, 12);
        assert_abs_diff_eq!(result.interest, 600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.amount, 10_600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_simple_interest_is_linear() {
        let one = simple_interest(5_000.0, 0.045, 18);
        let two = simple_interest(5_000.0, 0.045, 36);
        assert_abs_diff_eq!(two.interest, 2.0 * one.interest, epsilon = 1e-9);
        assert!(one.amount >= 5_000.0);
    }

    #[test]
    fn test_periodic_compound_monthly() {
        let result = periodic_compound(10_000.0, 0.06, 12, 12);
        assert_abs_diff_eq!(result.amount, 10_616.78, epsilon = 0.005);
        assert_abs_diff_eq!(result.interest, result.amount - 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_periodic_compound_zero_term() {
        let result = periodic_compound(2_500.0, 0.08, 0, 4);
        assert_eq!(result.interest, 0.0);
        assert_eq!(result.amount, 2_500.0);
    }

    #[test]
    fn test_compounding_beats_simple() {
        for &m in &[1u32, 2, 4, 12, 365] {
            for &t in &[1u32, 6, 12, 60, 240] {
                let simple = simple_interest(1_000.0, 0.07, t);
                let compound = periodic_compound(1_000.0, 0.07, t, m);
                assert!(
                    compound.amount >= simple.amount - 1e-9,
                    "m={} t={}: {} < {}",
                    m,
                    t,
                    compound.amount,
                    simple.amount
                );
            }
        }
    }

    #[test]
    fn test_converges_to_continuous() {
        let continuous = continuous_compound(10_000.0, 0.06, 12).amount;
        let gaps: Vec<f64> = [12u32, 365, 8760]
            .iter()
            .map(|&m| (continuous - periodic_compound(10_000.0, 0.06, 12, m).amount).abs())
            .collect();

        assert!(gaps[0] > gaps[1]);
        assert!(gaps[1] > gaps[2]);
        assert!(gaps[2] < 0.01);
    }

    #[test]
    fn test_continuous_compound_one_year() {
        let result = continuous_compound(10_000.0, 0.06, 12);
        assert_abs_diff_eq!(result.amount, 10_618.37, epsilon = 0.005);
    }

    #[test]
    fn test_zero_rate_returns_principal() {
        assert_eq!(simple_interest(750.0, 0.0, 24).amount, 750.0);
        assert_eq!(periodic_compound(750.0, 0.0, 24, 12).amount, 750.0);
        assert_eq!(continuous_compound(750.0, 0.0, 24).amount, 750.0);
    }
}
