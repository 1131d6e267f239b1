//! Raw tabular input as handed over by an ingestion adapter.
//!
//! Cells are kept as optional strings; a blank cell is missing. Header names
//! are trimmed so that `" Master Gain "` and `"Master Gain"` address the same
//! column.

use super::error::PnlscopeError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Build a table, trimming column names and normalising every row to the
    /// header width (short rows are padded with missing cells, extra cells are
    /// dropped).
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let columns: Vec<String> = columns.into_iter().map(|c| c.trim().to_string()).collect();
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                for cell in row.iter_mut() {
                    if cell.as_deref().is_some_and(|v| v.trim().is_empty()) {
                        *cell = None;
                    }
                }
                row.resize(width, None);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize, PnlscopeError> {
        self.column_index(name)
            .ok_or_else(|| PnlscopeError::MissingColumn {
                column: name.to_string(),
            })
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }

    /// Copy of the table keeping only rows where `column` has a value.
    /// Returns the filtered table and the number of rows dropped.
    pub fn retain_present(&self, column: &str) -> Result<(Table, usize), PnlscopeError> {
        let idx = self.require_column(column)?;
        let rows: Vec<Vec<Option<String>>> = self
            .rows
            .iter()
            .filter(|row| row[idx].is_some())
            .cloned()
            .collect();
        let dropped = self.rows.len() - rows.len();
        Ok((
            Table {
                columns: self.columns.clone(),
                rows,
            },
            dropped,
        ))
    }

    /// Parse every present cell of `column` as `f64`, skipping missing cells.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>, PnlscopeError> {
        let idx = self.require_column(column)?;
        let mut values = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            if let Some(raw) = row[idx].as_deref() {
                values.push(parse_number(raw).ok_or_else(|| PnlscopeError::InvalidValue {
                    row: i + 1,
                    column: self.columns[idx].clone(),
                    value: raw.to_string(),
                })?);
            }
        }
        Ok(values)
    }
}

/// Parse a numeric cell. Surrounding whitespace is ignored; `NaN` and
/// infinity spellings are rejected so they surface as invalid data.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    fn sample() -> Table {
        Table::new(
            vec![" Ticker".into(), "Master Gain ".into(), "Calc Gain".into()],
            vec![
                cells(&["AAA", "100", "90"]),
                cells(&["", "5", "1"]),
                cells(&["CCC", " -2.5 ", ""]),
            ],
        )
    }

    #[test]
    fn new_trims_headers() {
        let table = sample();
        assert_eq!(table.columns(), &["Ticker", "Master Gain", "Calc Gain"]);
        assert_eq!(table.column_index("Master Gain"), Some(1));
        assert_eq!(table.column_index(" Calc Gain "), Some(2));
    }

    #[test]
    fn blank_cells_become_missing() {
        let table = sample();
        assert_eq!(table.cell(1, 0), None);
        assert_eq!(table.cell(2, 2), None);
        assert_eq!(table.cell(0, 0), Some("AAA"));
    }

    #[test]
    fn short_rows_are_padded() {
        let table = Table::new(
            vec!["Ticker".into(), "Master Gain".into()],
            vec![cells(&["AAA"])],
        );
        assert_eq!(table.rows()[0].len(), 2);
        assert_eq!(table.cell(0, 1), None);
    }

    #[test]
    fn retain_present_drops_missing_tickers() {
        let (filtered, dropped) = sample().retain_present("Ticker").unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(filtered.row_count(), 2);
        assert_eq!(filtered.cell(1, 0), Some("CCC"));
    }

    #[test]
    fn require_column_reports_missing() {
        let err = sample().require_column("Total Gain").unwrap_err();
        assert!(matches!(err, PnlscopeError::MissingColumn { column } if column == "Total Gain"));
    }

    #[test]
    fn numeric_column_skips_missing() {
        let values = sample().numeric_column("Calc Gain").unwrap();
        assert_eq!(values, vec![90.0, 1.0]);
    }

    #[test]
    fn numeric_column_rejects_text() {
        let table = Table::new(
            vec!["Master Gain".into()],
            vec![cells(&["12"]), cells(&["n/a"])],
        );
        let err = table.numeric_column("Master Gain").unwrap_err();
        assert!(matches!(err, PnlscopeError::InvalidValue { row: 2, .. }));
    }

    #[test]
    fn parse_number_rejects_non_finite() {
        assert_eq!(parse_number(" 3.5 "), Some(3.5));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-Infinity"), None);
        assert_eq!(parse_number("abc"), None);
    }
}
