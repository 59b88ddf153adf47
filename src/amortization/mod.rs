//! Month-by-month loan amortization

mod schedule;

pub use schedule::{amortization_schedule, AmortizationRow, AmortizationSchedule};
