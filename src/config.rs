//! Calculator configuration
//!
//! Loaded from a JSON file; any field left out takes its built-in default,
//! so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{CalcError, Result};
use crate::growth::DEFAULT_MAX_CHART_POINTS;

/// Settings shared by the CLI, batch runner and HTTP handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Cap on sampled points for interest growth curves
    /// Default: 120
    #[serde(default = "default_max_chart_points")]
    pub max_chart_points: u32,

    /// Compounding frequency used by `calc compound` when none is given
    /// Default: 12 (monthly)
    #[serde(default = "default_frequency")]
    pub default_frequency: u32,

    /// Longest term the HTTP handler will compute, in months
    /// Default: 1200 (100 years)
    #[serde(default = "default_max_term_months")]
    pub max_term_months: u32,

    /// Emit the full amortization schedule for loans
    #[serde(default = "default_true")]
    pub include_schedule: bool,
}

fn default_max_chart_points() -> u32 { DEFAULT_MAX_CHART_POINTS }
fn default_frequency() -> u32 { 12 }
fn default_max_term_months() -> u32 { 1_200 }
fn default_true() -> bool { true }

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_chart_points: DEFAULT_MAX_CHART_POINTS,
            default_frequency: 12,
            max_term_months: 1_200,
            include_schedule: true,
        }
    }
}

impl CalculatorConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: CalculatorConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        log::debug!("Loaded config from {}: {:?}", path.as_ref().display(), config);
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_chart_points == 0 {
            return Err(CalcError::invalid("max_chart_points must be at least 1"));
        }
        if self.max_term_months == 0 {
            return Err(CalcError::invalid("max_term_months must be at least 1"));
        }
        if self.default_frequency == 0 {
            return Err(CalcError::invalid("default_frequency must be at least 1"));
        }
        Ok(())
    }
}
