//! Batch evaluation of calculation scenarios from CSV
//!
//! Input columns: `mode,principal,rate_pct,months,frequency` (frequency may
//! be blank). Each row is validated and computed independently; a row that
//! fails validation is reported in the `error` column rather than stopping
//! the run.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::formulas::loan_installment;
use crate::mode::{CalculationMode, CalculationRequest};

/// One input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub mode: String,
    pub principal: Option<f64>,
    pub rate_pct: Option<f64>,
    pub months: Option<u32>,
    pub frequency: Option<u32>,
}

/// One output row: the scenario echoed back with its results or error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub mode: String,
    pub principal: Option<f64>,
    pub rate_pct: Option<f64>,
    pub months: Option<u32>,
    pub frequency: Option<u32>,
    pub interest: Option<f64>,
    pub amount: Option<f64>,
    pub installment: Option<f64>,
    pub error: Option<String>,
}

/// Row counts for a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub failed: usize,
}

impl Scenario {
    fn to_request(&self) -> Result<CalculationRequest> {
        let mode: CalculationMode = self.mode.parse()?;
        Ok(CalculationRequest {
            mode,
            principal: self.principal,
            rate_pct: self.rate_pct,
            months: self.months,
            frequency: self.frequency,
        })
    }

    /// Validate and compute this scenario
    pub fn evaluate(&self) -> ScenarioResult {
        let mut result = ScenarioResult {
            mode: self.mode.clone(),
            principal: self.principal,
            rate_pct: self.rate_pct,
            months: self.months,
            frequency: self.frequency,
            interest: None,
            amount: None,
            installment: None,
            error: None,
        };

        let calculation = match self.to_request().and_then(|r| r.into_calculation()) {
            Ok(calculation) => calculation,
            Err(e) => {
                result.error = Some(e.to_string());
                return result;
            }
        };

        // One line per scenario: headline values only, no curve or schedule
        let params = *calculation.params();
        match calculation.accrue(params.t_months) {
            Some(r) => {
                result.interest = Some(r.interest);
                result.amount = Some(r.amount);
            }
            None => {
                result.installment = Some(loan_installment(
                    params.principal,
                    params.annual_rate,
                    params.t_months,
                ));
            }
        }
        result
    }
}

pub fn read_scenarios<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut scenarios = Vec::new();
    for record in rdr.deserialize() {
        let scenario: Scenario = record?;
        scenarios.push(scenario);
    }
    Ok(scenarios)
}

pub fn write_results<W: Write>(results: &[ScenarioResult], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Evaluate every scenario in parallel, preserving input order
pub fn run_batch(scenarios: &[Scenario]) -> Vec<ScenarioResult> {
    let results: Vec<ScenarioResult> = scenarios.par_iter().map(Scenario::evaluate).collect();

    for (line, result) in results.iter().enumerate() {
        if let Some(err) = &result.error {
            // +2: header line and 1-based numbering
            log::warn!("Scenario on line {} rejected: {}", line + 2, err);
        }
    }
    results
}

/// Read scenarios from `input`, evaluate them, and write results to `output`
pub fn run_batch_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<BatchSummary> {
    let scenarios = read_scenarios(File::open(input.as_ref())?)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), input.as_ref().display());

    let results = run_batch(&scenarios);
    write_results(&results, File::create(output.as_ref())?)?;

    let summary = BatchSummary {
        total: results.len(),
        failed: results.iter().filter(|r| r.error.is_some()).count(),
    };
    log::info!(
        "Wrote {} results to {} ({} rejected)",
        summary.total,
        output.as_ref().display(),
        summary.failed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
mode,principal,rate_pct,months,frequency
simple,10000,6,12,
compound,10000,6,12,12
continuous,10000,6,12,
loan,100000,5,360,
compound,10000,6,12,
loan,0,5,12,
teleport,100,1,1,
";

    #[test]
    fn test_read_and_run() {
        let scenarios = read_scenarios(INPUT.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 7);
        assert_eq!(scenarios[0].frequency, None);
        assert_eq!(scenarios[1].frequency, Some(12));

        let results = run_batch(&scenarios);
        assert_eq!(results.len(), 7);

        assert!((results[0].interest.unwrap() - 600.0).abs() < 1e-9);
        assert!((results[1].amount.unwrap() - 10_616.78).abs() < 0.005);
        assert!((results[2].amount.unwrap() - 10_618.37).abs() < 0.005);
        assert!((results[3].installment.unwrap() - 536.82).abs() < 0.005);
        assert!(results[3].interest.is_none());

        // Missing frequency, non-positive principal, unknown mode
        assert!(results[4].error.as_ref().unwrap().contains("frequency"));
        assert!(results[5].error.as_ref().unwrap().contains("principal"));
        assert!(results[6].error.as_ref().unwrap().contains("teleport"));
    }

    #[test]
    fn test_write_results() {
        let input = "mode,principal,rate_pct,months,frequency\nloan,1200,0,12,\n";
        let scenarios = read_scenarios(input.as_bytes()).unwrap();
        let results = run_batch(&scenarios);

        let mut buf = Vec::new();
        write_results(&results, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "mode,principal,rate_pct,months,frequency,interest,amount,installment,error"
        );
        assert_eq!(lines[1], "loan,1200.0,0.0,12,,,,100.0,");
    }
}
