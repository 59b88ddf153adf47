//! Raw requests, validated calculations, and their outcomes

use serde::{Deserialize, Serialize};

use super::{CalculationMode, LoanParameters, Parameter};
use crate::amortization::{amortization_schedule, AmortizationSchedule};
use crate::error::{CalcError, Result};
use crate::formulas::{
    continuous_compound, loan_installment, periodic_compound, simple_interest, InterestResult,
};
use crate::growth::{growth_curve, GrowthPoint};

/// Inputs as a form, CLI, CSV row or JSON body supplies them
///
/// The rate is in percent. Missing fields are allowed here and reported by
/// [`CalculationRequest::into_calculation`] when the mode needs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub mode: CalculationMode,

    #[serde(default)]
    pub principal: Option<f64>,

    /// Annual rate in percent (5.0 = 5%)
    #[serde(default)]
    pub rate_pct: Option<f64>,

    #[serde(default)]
    pub months: Option<u32>,

    /// Compounding periods per year, periodic mode only
    #[serde(default)]
    pub frequency: Option<u32>,
}

impl CalculationRequest {
    pub fn new(mode: CalculationMode, principal: f64, rate_pct: f64, months: u32) -> Self {
        Self {
            mode,
            principal: Some(principal),
            rate_pct: Some(rate_pct),
            months: Some(months),
            frequency: None,
        }
    }

    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    fn require<T: Copy>(&self, parameter: Parameter, value: Option<T>) -> Result<T> {
        value.ok_or(CalcError::MissingParameter {
            mode: self.mode,
            parameter: parameter.name(),
        })
    }

    /// Check the mode's parameter set and positivity rules, then build the
    /// calculation. A frequency supplied to a mode that does not use it is
    /// ignored.
    pub fn into_calculation(self) -> Result<Calculation> {
        let principal = self.require(Parameter::Principal, self.principal)?;
        let rate_pct = self.require(Parameter::Rate, self.rate_pct)?;
        let months = self.require(Parameter::Term, self.months)?;

        let params = LoanParameters::from_percent(principal, rate_pct, months);
        params.validate()?;

        let calculation = match self.mode {
            CalculationMode::SimpleInterest => Calculation::SimpleInterest(params),
            CalculationMode::PeriodicCompound => {
                let frequency = self.require(Parameter::Frequency, self.frequency)?;
                if frequency == 0 {
                    return Err(CalcError::invalid(
                        "compounding frequency must be at least 1 per year",
                    ));
                }
                Calculation::PeriodicCompound { params, frequency }
            }
            CalculationMode::ContinuousCompound => Calculation::ContinuousCompound(params),
            CalculationMode::LoanAmortization => Calculation::LoanAmortization(params),
        };
        Ok(calculation)
    }
}

/// A validated calculation, tagged by mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    SimpleInterest(LoanParameters),
    PeriodicCompound { params: LoanParameters, frequency: u32 },
    ContinuousCompound(LoanParameters),
    LoanAmortization(LoanParameters),
}

impl Calculation {
    pub fn mode(&self) -> CalculationMode {
        match self {
            Calculation::SimpleInterest(_) => CalculationMode::SimpleInterest,
            Calculation::PeriodicCompound { .. } => CalculationMode::PeriodicCompound,
            Calculation::ContinuousCompound(_) => CalculationMode::ContinuousCompound,
            Calculation::LoanAmortization(_) => CalculationMode::LoanAmortization,
        }
    }

    pub fn params(&self) -> &LoanParameters {
        match self {
            Calculation::SimpleInterest(p)
            | Calculation::ContinuousCompound(p)
            | Calculation::LoanAmortization(p) => p,
            Calculation::PeriodicCompound { params, .. } => params,
        }
    }

    /// Interest and amount after `t_months` elapsed; `None` for loans
    pub fn accrue(&self, t_months: u32) -> Option<InterestResult> {
        match *self {
            Calculation::SimpleInterest(p) => {
                Some(simple_interest(p.principal, p.annual_rate, t_months))
            }
            Calculation::PeriodicCompound { params: p, frequency } => {
                Some(periodic_compound(p.principal, p.annual_rate, t_months, frequency))
            }
            Calculation::ContinuousCompound(p) => {
                Some(continuous_compound(p.principal, p.annual_rate, t_months))
            }
            Calculation::LoanAmortization(_) => None,
        }
    }

    /// Run the calculation over its full term
    ///
    /// Interest modes carry a growth curve sampled at up to `max_points`
    /// months; loans carry the installment and the full schedule.
    pub fn run(&self, max_points: u32) -> CalculationOutcome {
        let mode = self.mode();
        let params = *self.params();

        let outcome = match self.accrue(params.t_months) {
            Some(result) => CalculationOutcome::Interest {
                mode,
                result,
                growth: growth_curve(self, max_points),
            },
            None => {
                let LoanParameters { principal, annual_rate, t_months } = params;
                CalculationOutcome::Loan {
                    installment: loan_installment(principal, annual_rate, t_months),
                    schedule: amortization_schedule(principal, annual_rate, t_months),
                }
            }
        };

        log::debug!(
            "{} on {:.2} at {:.4} for {} months -> {:?}",
            mode.key(),
            params.principal,
            params.annual_rate,
            params.t_months,
            outcome.values()
        );
        outcome
    }
}

/// Result of a dispatched calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationOutcome {
    Interest {
        mode: CalculationMode,
        result: InterestResult,
        growth: Vec<GrowthPoint>,
    },
    Loan {
        installment: f64,
        schedule: AmortizationSchedule,
    },
}

impl CalculationOutcome {
    pub fn mode(&self) -> CalculationMode {
        match self {
            CalculationOutcome::Interest { mode, .. } => *mode,
            CalculationOutcome::Loan { .. } => CalculationMode::LoanAmortization,
        }
    }

    /// Headline values in the order of [`CalculationMode::result_labels`]
    pub fn values(&self) -> Vec<f64> {
        match self {
            CalculationOutcome::Interest { result, .. } => vec![result.interest, result.amount],
            CalculationOutcome::Loan { installment, .. } => vec![*installment],
        }
    }

    /// (label, value) pairs for display
    pub fn labelled_values(&self) -> Vec<(&'static str, f64)> {
        self.mode()
            .result_labels()
            .iter()
            .copied()
            .zip(self.values())
            .collect()
    }
}
