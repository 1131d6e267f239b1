//! CSV trading-master adapter.

use std::fs::File;
use std::path::Path;

use crate::domain::error::PnlscopeError;
use crate::domain::risk_curve::RankedRiskCurve;
use crate::domain::table::Table;
use crate::ports::data_port::DataPort;

pub struct CsvAdapter {
    delimiter: u8,
}

impl CsvAdapter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write the ranked risk curve, one row per position.
    pub fn write_risk_curve(
        &self,
        curve: &RankedRiskCurve,
        path: &Path,
    ) -> Result<(), PnlscopeError> {
        let export_error = |reason: String| PnlscopeError::Export {
            path: path.display().to_string(),
            reason,
        };

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(|e| export_error(e.to_string()))?;

        for row in &curve.rows {
            wtr.serialize(row).map_err(|e| export_error(e.to_string()))?;
        }
        wtr.flush().map_err(|e| export_error(e.to_string()))?;

        tracing::info!(rows = curve.len(), path = %path.display(), "wrote risk curve");
        Ok(())
    }
}

impl Default for CsvAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DataPort for CsvAdapter {
    fn load_table(&self, path: &Path) -> Result<Table, PnlscopeError> {
        let file = File::open(path).map_err(|e| PnlscopeError::Ingest {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(file);

        let columns: Vec<String> = rdr
            .headers()
            .map_err(|e| PnlscopeError::Ingest {
                reason: format!("CSV header error: {}", e),
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| PnlscopeError::Ingest {
                reason: format!("CSV parse error: {}", e),
            })?;
            rows.push(
                record
                    .iter()
                    .map(|cell| {
                        let cell = cell.trim();
                        (!cell.is_empty()).then(|| cell.to_string())
                    })
                    .collect(),
            );
        }

        tracing::info!(
            path = %path.display(),
            columns = columns.len(),
            rows = rows.len(),
            "loaded table"
        );
        Ok(Table::new(columns, rows))
    }
}
