//! Data audit: missing cells per column and descriptive statistics for the
//! numeric gain columns.

use super::error::PnlscopeError;
use super::table::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub stats: Option<DescriptiveStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    pub rows: usize,
    pub missing: Vec<MissingCount>,
    pub numeric: Vec<ColumnSummary>,
}

impl AuditReport {
    pub fn total_missing(&self) -> usize {
        self.missing.iter().map(|m| m.missing).sum()
    }
}

pub fn audit_table<S: AsRef<str>>(
    table: &Table,
    numeric_columns: &[S],
) -> Result<AuditReport, PnlscopeError> {
    let missing = table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| MissingCount {
            column: column.clone(),
            missing: table.rows().iter().filter(|row| row[idx].is_none()).count(),
        })
        .collect();

    let numeric = numeric_columns
        .iter()
        .map(|column| {
            let values = table.numeric_column(column.as_ref())?;
            Ok(ColumnSummary {
                column: column.as_ref().trim().to_string(),
                count: values.len(),
                stats: describe(&values),
            })
        })
        .collect::<Result<Vec<_>, PnlscopeError>>()?;

    Ok(AuditReport {
        rows: table.row_count(),
        missing,
        numeric,
    })
}

pub fn describe(values: &[f64]) -> Option<DescriptiveStats> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = if values.len() > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Some(var.sqrt())
    } else {
        None
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(DescriptiveStats {
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Linear interpolation between order statistics of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}
