//! Per-ticker deep dive.

use std::collections::HashSet;

use super::error::PnlscopeError;
use super::ranking::{rank_by_gain, Direction};
use super::record::{RecordSet, TradeRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct TickerDetail {
    pub ticker: String,
    pub gain: f64,
    /// Gain as a fraction of total PnL; 0 when the total is 0.
    pub contribution: f64,
    /// 1-based position in the descending gain ranking.
    pub rank: usize,
    pub universe: usize,
}

/// Detail for the first record carrying `ticker`.
pub fn ticker_detail(records: &RecordSet, ticker: &str) -> Result<TickerDetail, PnlscopeError> {
    let record = records
        .iter()
        .find(|r| r.ticker == ticker)
        .ok_or_else(|| PnlscopeError::UnknownTicker {
            ticker: ticker.to_string(),
        })?;

    let rank = rank_by_gain(records, Direction::Descending)
        .iter()
        .position(|r| std::ptr::eq(*r, record))
        .map(|i| i + 1)
        .unwrap_or(records.len());

    let total = records.total_gain();
    let contribution = if total == 0.0 { 0.0 } else { record.gain / total };

    Ok(TickerDetail {
        ticker: record.ticker.clone(),
        gain: record.gain,
        contribution,
        rank,
        universe: records.len(),
    })
}

/// The `n` highest gains, ties in input order.
pub fn top_by_gain(records: &RecordSet, n: usize) -> Vec<&TradeRecord> {
    let mut ranked = rank_by_gain(records, Direction::Descending);
    ranked.truncate(n);
    ranked
}

/// Distinct tickers in first-seen order.
pub fn unique_tickers(records: &RecordSet) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.ticker.as_str())
        .filter(|t| seen.insert(*t))
        .collect()
}
