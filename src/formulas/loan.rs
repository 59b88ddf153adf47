//! Fixed-payment loan installment

use super::MONTHS_PER_YEAR;

/// Monthly installment that repays `principal` over `t_months`
///
/// PMT = P * i / (1 - (1 + i)^-n), with i = r / 12.
///
/// A zero-month term returns the principal as a single payment. A zero rate
/// falls back to straight-line repayment, P / n.
pub fn loan_installment(principal: f64, annual_rate: f64, t_months: u32) -> f64 {
    if t_months == 0 {
        return principal;
    }

    let n = t_months as f64;
    let monthly_rate = annual_rate / MONTHS_PER_YEAR;
    if monthly_rate == 0.0 {
        return principal / n;
    }

    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_thirty_year_mortgage() {
        let pmt = loan_installment(100_000.0, 0.05, 360);
        assert_abs_diff_eq!(pmt, 536.82, epsilon = 0.005);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(loan_installment(12_000.0, 0.0, 24), 12_000.0 / 24.0);
    }

    #[test]
    fn test_zero_term_returns_principal() {
        assert_eq!(loan_installment(8_000.0, 0.09, 0), 8_000.0);
        assert_eq!(loan_installment(8_000.0, 0.0, 0), 8_000.0);
    }

    #[test]
    fn test_single_month_repays_with_interest() {
        // One payment covers principal plus one month of interest
        let pmt = loan_installment(1_000.0, 0.12, 1);
        assert_abs_diff_eq!(pmt, 1_010.0, epsilon = 1e-6);
    }
}
