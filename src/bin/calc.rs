//! Command-line interest and loan calculator
//!
//! ```bash
//! calc simple --principal 10000 --rate 6 --months 12
//! calc compound --principal 10000 --rate 6 --months 12 --frequency 12
//! calc loan --principal 100000 --rate 5 --months 360 --schedule schedule.csv
//! calc batch --input scenarios.csv --output results.csv
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use interest_calculator::batch::run_batch_file;
use interest_calculator::report::{
    outcome_to_json, render_summary, render_table, write_outcome_csv, write_schedule_csv,
};
use interest_calculator::{
    CalculationMode, CalculationOutcome, CalculationRequest, CalculatorConfig,
};

#[derive(Parser)]
#[command(name = "calc")]
#[command(
    author,
    version,
    about = "Simple, compound and continuous interest, and loan amortization"
)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple interest: A = P(1 + rt)
    Simple(TermArgs),

    /// Periodic compound interest: A = P(1 + r/m)^(mt)
    Compound {
        #[command(flatten)]
        term: TermArgs,

        /// Compounding periods per year (defaults to the configured value)
        #[arg(short = 'm', long)]
        frequency: Option<u32>,
    },

    /// Continuous compound interest: A = Pe^(rt)
    Continuous(TermArgs),

    /// Monthly loan installment and amortization schedule
    Loan {
        #[command(flatten)]
        term: TermArgs,

        /// Write the amortization schedule to this CSV file
        #[arg(long)]
        schedule: Option<PathBuf>,

        /// Print only the installment
        #[arg(long)]
        no_schedule: bool,
    },

    /// Evaluate a CSV of scenarios in parallel
    Batch {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// List calculation modes and their parameters
    Modes,
}

#[derive(Args)]
struct TermArgs {
    /// Principal amount
    #[arg(short, long)]
    principal: f64,

    /// Annual rate in percent (5 = 5%)
    #[arg(short, long)]
    rate: f64,

    /// Term in months
    #[arg(short = 't', long)]
    months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Summary followed by a fixed-width table
    #[default]
    Table,
    Json,
    Csv,
}

impl TermArgs {
    fn request(&self, mode: CalculationMode) -> CalculationRequest {
        CalculationRequest::new(mode, self.principal, self.rate, self.months)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    let request = match &cli.command {
        Commands::Simple(term) => term.request(CalculationMode::SimpleInterest),
        Commands::Compound { term, frequency } => term
            .request(CalculationMode::PeriodicCompound)
            .with_frequency(frequency.unwrap_or(config.default_frequency)),
        Commands::Continuous(term) => term.request(CalculationMode::ContinuousCompound),
        Commands::Loan { term, .. } => term.request(CalculationMode::LoanAmortization),
        Commands::Batch { input, output } => {
            let summary = run_batch_file(input, output)
                .with_context(|| format!("Batch run failed for {}", input.display()))?;
            println!(
                "Evaluated {} scenarios ({} rejected), results in {}",
                summary.total,
                summary.failed,
                output.display()
            );
            return Ok(());
        }
        Commands::Modes => {
            print_modes();
            return Ok(());
        }
    };

    let outcome = request.into_calculation()?.run(config.max_chart_points);

    let mut include_detail = config.include_schedule;
    if let Commands::Loan { schedule, no_schedule, .. } = &cli.command {
        include_detail &= !no_schedule;
        if let (Some(path), CalculationOutcome::Loan { schedule: rows, .. }) =
            (schedule, &outcome)
        {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_schedule_csv(rows, file)?;
            log::info!("Wrote {} schedule rows to {}", rows.len(), path.display());
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_outcome(&outcome, cli.format, include_detail, &mut out)
}

/// Write an outcome in the requested format
///
/// Without detail every format carries only the headline values.
fn render_outcome<W: Write>(
    outcome: &CalculationOutcome,
    format: OutputFormat,
    include_detail: bool,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            write!(out, "{}", render_summary(outcome))?;
            if include_detail {
                writeln!(out)?;
                write!(out, "{}", render_table(outcome))?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", outcome_to_json(outcome, include_detail, true)?)?;
        }
        OutputFormat::Csv => write_outcome_csv(outcome, include_detail, out)?,
    }
    Ok(())
}

fn print_modes() {
    for mode in CalculationMode::ALL {
        let params: Vec<&str> = mode.required_parameters().iter().map(|p| p.name()).collect();
        println!("{:<12} {}", mode.key(), mode.name());
        println!("{:<12} {}", "", mode.description());
        println!("{:<12} parameters: {}", "", params.join(", "));
        println!("{:<12} results:    {}", "", mode.result_labels().join(", "));
    }
}
