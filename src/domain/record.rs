//! Trading-result records and the validated record set.

use std::slice::Iter;

use super::error::PnlscopeError;
use super::table::{parse_number, Table};

/// One row of the trading master: a ticker and its realised gain.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub ticker: String,
    pub gain: f64,
}

impl TradeRecord {
    pub fn new(ticker: impl Into<String>, gain: f64) -> Self {
        Self {
            ticker: ticker.into(),
            gain,
        }
    }

    pub fn abs_gain(&self) -> f64 {
        self.gain.abs()
    }
}

/// A row as it may arrive from a careless caller: either field can be absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    pub ticker: Option<String>,
    pub gain: Option<f64>,
}

impl RawRecord {
    pub fn new(ticker: Option<&str>, gain: Option<f64>) -> Self {
        Self {
            ticker: ticker.map(str::to_string),
            gain,
        }
    }
}

/// Ordered, validated sequence of [`TradeRecord`]s.
///
/// Input order is preserved and is the tie-break order for every ranking.
/// Every record has a non-blank ticker and a non-NaN gain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    records: Vec<TradeRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<TradeRecord>) -> Result<Self, PnlscopeError> {
        for (i, record) in records.iter().enumerate() {
            check_record(i + 1, &record.ticker, record.gain)?;
        }
        Ok(Self { records })
    }

    pub fn from_raw(rows: Vec<RawRecord>) -> Result<Self, PnlscopeError> {
        let mut records = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let row_no = i + 1;
            let ticker = row.ticker.ok_or_else(|| PnlscopeError::missing(row_no, "ticker"))?;
            let gain = row.gain.ok_or_else(|| PnlscopeError::missing(row_no, "gain"))?;
            check_record(row_no, &ticker, gain)?;
            records.push(TradeRecord { ticker, gain });
        }
        Ok(Self { records })
    }

    /// Build a record set from a raw table.
    ///
    /// Rows without a ticker are dropped, as the trading master carries
    /// subtotal and note rows with a blank ticker. A remaining row without a
    /// gain is an error. Row numbers in errors refer to the filtered table.
    pub fn from_table(
        table: &Table,
        ticker_column: &str,
        gain_column: &str,
    ) -> Result<Self, PnlscopeError> {
        let gain_idx = table.require_column(gain_column)?;
        let (filtered, dropped) = table.retain_present(ticker_column)?;
        if dropped > 0 {
            tracing::warn!(dropped, column = ticker_column, "dropped rows without a ticker");
        }
        let ticker_idx = filtered.require_column(ticker_column)?;

        let mut records = Vec::with_capacity(filtered.row_count());
        for row in 0..filtered.row_count() {
            let row_no = row + 1;
            let ticker = filtered
                .cell(row, ticker_idx)
                .ok_or_else(|| PnlscopeError::missing(row_no, "ticker"))?
                .trim()
                .to_string();
            let raw_gain = filtered
                .cell(row, gain_idx)
                .ok_or_else(|| PnlscopeError::missing(row_no, "gain"))?;
            let gain = parse_number(raw_gain).ok_or_else(|| PnlscopeError::InvalidValue {
                row: row_no,
                column: gain_column.to_string(),
                value: raw_gain.to_string(),
            })?;
            records.push(TradeRecord { ticker, gain });
        }

        tracing::debug!(records = records.len(), "built record set from table");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn iter(&self) -> Iter<'_, TradeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of gains, folded in input order.
    pub fn total_gain(&self) -> f64 {
        self.records.iter().fold(0.0, |acc, r| acc + r.gain)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a TradeRecord;
    type IntoIter = Iter<'a, TradeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn check_record(row: usize, ticker: &str, gain: f64) -> Result<(), PnlscopeError> {
    if ticker.trim().is_empty() {
        return Err(PnlscopeError::missing(row, "ticker"));
    }
    if gain.is_nan() {
        return Err(PnlscopeError::missing(row, "gain"));
    }
    if gain.is_infinite() {
        return Err(PnlscopeError::InvalidValue {
            row,
            column: "gain".to_string(),
            value: gain.to_string(),
        });
    }
    Ok(())
}
