//! Calculation modes, their parameter sets, and request validation

mod params;
mod request;

pub use params::{LoanParameters, Parameter};
pub use request::{Calculation, CalculationOutcome, CalculationRequest};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

const INTEREST_LABELS: &[&str] = &["Total interest", "Final amount"];
const LOAN_LABELS: &[&str] = &["Monthly installment"];

/// The four supported calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMode {
    #[serde(rename = "simple")]
    SimpleInterest,
    #[serde(rename = "compound")]
    PeriodicCompound,
    #[serde(rename = "continuous")]
    ContinuousCompound,
    #[serde(rename = "loan")]
    LoanAmortization,
}

impl CalculationMode {
    pub const ALL: [CalculationMode; 4] = [
        CalculationMode::SimpleInterest,
        CalculationMode::PeriodicCompound,
        CalculationMode::ContinuousCompound,
        CalculationMode::LoanAmortization,
    ];

    /// Short key used on the command line, in CSV batches and JSON requests
    pub fn key(&self) -> &'static str {
        match self {
            CalculationMode::SimpleInterest => "simple",
            CalculationMode::PeriodicCompound => "compound",
            CalculationMode::ContinuousCompound => "continuous",
            CalculationMode::LoanAmortization => "loan",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CalculationMode::SimpleInterest => "Simple interest",
            CalculationMode::PeriodicCompound => "Compound interest (periodic)",
            CalculationMode::ContinuousCompound => "Continuous compound interest",
            CalculationMode::LoanAmortization => "Loan installment (amortization)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalculationMode::SimpleInterest => "Interest accrues on the principal only.",
            CalculationMode::PeriodicCompound => {
                "Interest is added to the principal a fixed number of times per year."
            }
            CalculationMode::ContinuousCompound => {
                "Interest compounds continuously using the natural exponential."
            }
            CalculationMode::LoanAmortization => {
                "Fixed monthly installment with a month-by-month amortization schedule."
            }
        }
    }

    /// Parameters that must be present for this mode
    pub fn required_parameters(&self) -> &'static [Parameter] {
        match self {
            CalculationMode::PeriodicCompound => &[
                Parameter::Principal,
                Parameter::Rate,
                Parameter::Term,
                Parameter::Frequency,
            ],
            CalculationMode::SimpleInterest
            | CalculationMode::ContinuousCompound
            | CalculationMode::LoanAmortization => {
                &[Parameter::Principal, Parameter::Rate, Parameter::Term]
            }
        }
    }

    /// Labels for the values in a [`CalculationOutcome`], in display order
    pub fn result_labels(&self) -> &'static [&'static str] {
        match self {
            CalculationMode::LoanAmortization => LOAN_LABELS,
            _ => INTEREST_LABELS,
        }
    }

    pub fn requires(&self, parameter: Parameter) -> bool {
        self.required_parameters().contains(&parameter)
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculationMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "simple_interest" => Ok(CalculationMode::SimpleInterest),
            "compound" | "periodic" | "periodic_compound" => Ok(CalculationMode::PeriodicCompound),
            "continuous" | "continuous_compound" => Ok(CalculationMode::ContinuousCompound),
            "loan" | "installment" | "amortization" => Ok(CalculationMode::LoanAmortization),
            _ => Err(CalcError::UnknownMode(s.to_string())),
        }
    }
}
