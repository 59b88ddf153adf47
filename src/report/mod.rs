//! Rendering calculation outcomes as tables, CSV and JSON

mod format;
mod writer;

pub use format::format_amount;
pub use writer::{
    outcome_to_json, render_summary, render_table, write_growth_csv, write_outcome_csv,
    write_schedule_csv, write_summary_csv, LabelledValue, OutcomeReport,
};
