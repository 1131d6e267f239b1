//! Portfolio-wide aggregate metrics.

use std::collections::HashSet;

use super::error::PnlscopeError;
use super::record::RecordSet;

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateMetrics {
    pub total_pnl: f64,
    pub avg_pnl: f64,
    /// Fraction of records with a strictly positive gain.
    pub win_rate: f64,
    pub num_tickers: usize,
    /// Largest single gain as a fraction of `total_pnl`; 0 when the total is 0.
    pub top_contribution: f64,
}

pub fn compute_aggregate_metrics(records: &RecordSet) -> Result<AggregateMetrics, PnlscopeError> {
    if records.is_empty() {
        return Err(PnlscopeError::empty("aggregate metrics"));
    }

    let mut total_pnl = 0.0_f64;
    let mut winners = 0usize;
    let mut max_gain = f64::NEG_INFINITY;
    let mut tickers: HashSet<&str> = HashSet::new();

    for record in records {
        total_pnl += record.gain;
        if record.gain > 0.0 {
            winners += 1;
        }
        if record.gain > max_gain {
            max_gain = record.gain;
        }
        tickers.insert(record.ticker.as_str());
    }

    let n = records.len() as f64;
    let top_contribution = if total_pnl == 0.0 {
        0.0
    } else {
        max_gain / total_pnl
    };

    Ok(AggregateMetrics {
        total_pnl,
        avg_pnl: total_pnl / n,
        win_rate: winners as f64 / n,
        num_tickers: tickers.len(),
        top_contribution,
    })
}
