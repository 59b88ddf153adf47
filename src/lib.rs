//! Interest and loan calculator
//!
//! Closed-form simple, periodic and continuous interest, fixed loan
//! installments, and month-by-month amortization schedules.
//!
//! ```
//! use interest_calculator::{CalculationMode, CalculationRequest};
//!
//! let outcome = CalculationRequest::new(CalculationMode::SimpleInterest, 10_000.0, 6.0, 12)
//!     .into_calculation()
//!     .unwrap()
//!     .run(120);
//! assert!((outcome.values()[0] - 600.0).abs() < 1e-9);
//! ```

pub mod amortization;
pub mod batch;
pub mod config;
pub mod error;
pub mod formulas;
pub mod growth;
pub mod mode;
pub mod report;

pub use amortization::{amortization_schedule, AmortizationRow, AmortizationSchedule};
pub use config::CalculatorConfig;
pub use error::{CalcError, Result};
pub use formulas::{
    continuous_compound, loan_installment, periodic_compound, simple_interest, InterestResult,
};
pub use growth::{growth_curve, sample_months, GrowthPoint, DEFAULT_MAX_CHART_POINTS};
pub use mode::{
    Calculation, CalculationMode, CalculationOutcome, CalculationRequest, LoanParameters,
};
