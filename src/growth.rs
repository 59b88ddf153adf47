//! Growth curve sampling for the interest-accrual modes
//!
//! Each point recomputes the closed-form formula from month zero, so the
//! curve is exact at every sampled month regardless of stride.

use serde::{Deserialize, Serialize};

use crate::mode::Calculation;

/// Default cap on sampled points for a growth chart
pub const DEFAULT_MAX_CHART_POINTS: u32 = 120;

/// Accumulated amount after a given number of elapsed months
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub month: u32,
    pub amount: f64,
}

/// Months at which to sample a growth curve
///
/// Uses a stride of `term / min(term, max_points)` (at least 1) starting at
/// month 1. The final month is always included even when the stride would
/// step past it.
pub fn sample_months(term: u32, max_points: u32) -> Vec<u32> {
    let num_points = term.min(max_points.max(1));
    if num_points == 0 {
        return Vec::new();
    }

    let stride = (term / num_points).max(1) as usize;
    let mut months: Vec<u32> = (1..=term).step_by(stride).collect();
    if months.last() != Some(&term) {
        months.push(term);
    }
    months
}

/// Sample the accumulated amount over the calculation's term
///
/// Loan calculations have no growth curve and return an empty series.
pub fn growth_curve(calculation: &Calculation, max_points: u32) -> Vec<GrowthPoint> {
    sample_months(calculation.params().t_months, max_points)
        .into_iter()
        .filter_map(|month| {
            calculation
                .accrue(month)
                .map(|result| GrowthPoint { month, amount: result.amount })
        })
        .collect()
}
