//! One-paragraph performance summary: total PnL, top performer, largest drag.

use std::fmt;

use super::error::PnlscopeError;
use super::format::{format_currency, format_signed_currency};
use super::ranking::{rank_by_gain, Direction};
use super::record::{RecordSet, TradeRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct Performer {
    pub ticker: String,
    pub gain: f64,
}

impl From<&TradeRecord> for Performer {
    fn from(record: &TradeRecord) -> Self {
        Performer {
            ticker: record.ticker.clone(),
            gain: record.gain,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightSummary {
    pub total_pnl: f64,
    pub best: Performer,
    pub worst: Performer,
}

pub fn generate_insight(records: &RecordSet) -> Result<InsightSummary, PnlscopeError> {
    let best = rank_by_gain(records, Direction::Descending)
        .first()
        .map(|r| Performer::from(*r))
        .ok_or_else(|| PnlscopeError::empty("insight"))?;
    let worst = rank_by_gain(records, Direction::Ascending)
        .first()
        .map(|r| Performer::from(*r))
        .ok_or_else(|| PnlscopeError::empty("insight"))?;

    Ok(InsightSummary {
        total_pnl: records.total_gain(),
        best,
        worst,
    })
}

impl fmt::Display for InsightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Portfolio PnL: {}", format_currency(self.total_pnl))?;
        writeln!(
            f,
            "- Top performer: {} ({})",
            self.best.ticker,
            format_signed_currency(self.best.gain)
        )?;
        write!(
            f,
            "- Largest drag: {} ({})",
            self.worst.ticker,
            format_signed_currency(self.worst.gain)
        )
    }
}
