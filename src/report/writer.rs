//! Table, CSV and JSON writers for calculation outcomes

use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

use super::format_amount;
use crate::amortization::AmortizationSchedule;
use crate::error::Result;
use crate::formulas::round_to_cents;
use crate::growth::GrowthPoint;
use crate::mode::{CalculationMode, CalculationOutcome};

/// Headline value with its label and display string
#[derive(Debug, Clone, Serialize)]
pub struct LabelledValue {
    pub label: &'static str,
    pub value: f64,
    pub display: String,
}

/// JSON view of an outcome: labelled headline values plus, optionally, the
/// full detail (growth curve or amortization schedule)
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeReport<'a> {
    pub mode: CalculationMode,
    pub mode_name: &'static str,
    pub results: Vec<LabelledValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'a CalculationOutcome>,
}

impl<'a> OutcomeReport<'a> {
    pub fn new(outcome: &'a CalculationOutcome, include_detail: bool) -> Self {
        let mode = outcome.mode();
        let results = outcome
            .labelled_values()
            .into_iter()
            .map(|(label, value)| LabelledValue {
                label,
                value,
                display: format_amount(value),
            })
            .collect();

        Self {
            mode,
            mode_name: mode.name(),
            results,
            detail: include_detail.then_some(outcome),
        }
    }
}

pub fn outcome_to_json(
    outcome: &CalculationOutcome,
    include_detail: bool,
    pretty: bool,
) -> Result<String> {
    let report = OutcomeReport::new(outcome, include_detail);
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

/// Mode name followed by one `label: value` line per headline value
pub fn render_summary(outcome: &CalculationOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", outcome.mode().name());
    for (label, value) in outcome.labelled_values() {
        let _ = writeln!(out, "  {:<22} {:>16}", format!("{}:", label), format_amount(value));
    }
    out
}

/// Fixed-width table of the growth curve or amortization schedule
pub fn render_table(outcome: &CalculationOutcome) -> String {
    let mut out = String::new();
    match outcome {
        CalculationOutcome::Interest { growth, .. } => {
            let _ = writeln!(out, "{:>6} {:>18}", "Month", "Amount");
            for point in growth {
                let _ = writeln!(out, "{:>6} {:>18}", point.month, format_amount(point.amount));
            }
        }
        CalculationOutcome::Loan { schedule, .. } => {
            let _ = writeln!(
                out,
                "{:>6} {:>14} {:>14} {:>14} {:>16}",
                "Month", "Installment", "Interest", "Principal", "Balance"
            );
            for row in schedule.rows() {
                let _ = writeln!(
                    out,
                    "{:>6} {:>14} {:>14} {:>14} {:>16}",
                    row.month,
                    format_amount(row.installment),
                    format_amount(row.interest),
                    format_amount(row.principal),
                    format_amount(row.balance)
                );
            }
            let _ = writeln!(
                out,
                "{:>6} {:>14} {:>14} {:>14}",
                "Total",
                format_amount(schedule.total_paid()),
                format_amount(schedule.total_interest()),
                format_amount(schedule.total_principal())
            );
        }
    }
    out
}

/// Write schedule rows as CSV with a header line
pub fn write_schedule_csv<W: Write>(schedule: &AmortizationSchedule, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in schedule.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write growth points as CSV, amounts rounded to cents
pub fn write_growth_csv<W: Write>(growth: &[GrowthPoint], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in growth {
        wtr.serialize(GrowthPoint {
            month: point.month,
            amount: round_to_cents(point.amount),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct SummaryRow {
    label: &'static str,
    value: f64,
}

/// Write the headline values as `label,value` CSV, rounded to cents
pub fn write_summary_csv<W: Write>(outcome: &CalculationOutcome, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (label, value) in outcome.labelled_values() {
        wtr.serialize(SummaryRow {
            label,
            value: round_to_cents(value),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// CSV view of an outcome: headline values only, or the growth curve /
/// amortization schedule when `include_detail` is set
pub fn write_outcome_csv<W: Write>(
    outcome: &CalculationOutcome,
    include_detail: bool,
    writer: W,
) -> Result<()> {
    if !include_detail {
        return write_summary_csv(outcome, writer);
    }
    match outcome {
        CalculationOutcome::Interest { growth, .. } => write_growth_csv(growth, writer),
        CalculationOutcome::Loan { schedule, .. } => write_schedule_csv(schedule, writer),
    }
}
