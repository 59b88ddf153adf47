//! Validated calculation inputs

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// A named input field of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Principal,
    Rate,
    Term,
    Frequency,
}

impl Parameter {
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Principal => "principal",
            Parameter::Rate => "rate_pct",
            Parameter::Term => "months",
            Parameter::Frequency => "frequency",
        }
    }
}

/// Principal, rate and term shared by every calculation mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount invested or borrowed
    pub principal: f64,
    /// Annual rate as a fraction (0.05 = 5%)
    pub annual_rate: f64,
    /// Term in months
    pub t_months: u32,
}

impl LoanParameters {
    /// Build from a rate given in percent, as entered on a form
    pub fn from_percent(principal: f64, rate_pct: f64, t_months: u32) -> Self {
        Self {
            principal,
            annual_rate: rate_pct / 100.0,
            t_months,
        }
    }

    /// Positivity checks: principal > 0, rate >= 0, term >= 1
    ///
    /// The formulas accept anything; this is the guard callers run first.
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(CalcError::invalid(format!(
                "principal must be a positive number, got {}",
                self.principal
            )));
        }
        if !self.annual_rate.is_finite() || self.annual_rate < 0.0 {
            return Err(CalcError::invalid(format!(
                "annual rate must be zero or positive, got {}",
                self.annual_rate
            )));
        }
        if self.t_months == 0 {
            return Err(CalcError::invalid("term must be at least 1 month"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_percent() {
        let p = LoanParameters::from_percent(1_000.0, 6.5, 12);
        assert!((p.annual_rate - 0.065).abs() < 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(LoanParameters::from_percent(1_000.0, 5.0, 12).validate().is_ok());
        assert!(LoanParameters::from_percent(1_000.0, 0.0, 12).validate().is_ok());

        let bad = [
            LoanParameters::from_percent(0.0, 5.0, 12),
            LoanParameters::from_percent(-10.0, 5.0, 12),
            LoanParameters::from_percent(f64::NAN, 5.0, 12),
            LoanParameters::from_percent(1_000.0, -1.0, 12),
            LoanParameters::from_percent(1_000.0, f64::INFINITY, 12),
            LoanParameters::from_percent(1_000.0, 5.0, 0),
        ];
        for params in bad {
            assert!(
                matches!(params.validate(), Err(CalcError::InvalidInput(_))),
                "{:?} should be rejected",
                params
            );
        }
    }
}
