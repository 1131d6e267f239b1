//! Report generation port trait.

use std::path::Path;

use crate::domain::analysis::PortfolioAnalysis;
use crate::domain::error::PnlscopeError;
use crate::domain::record::RecordSet;
use crate::domain::settings::Settings;

/// Port for writing portfolio reports.
pub trait ReportPort {
    /// `analysis` must have been computed from `records`.
    fn write(
        &self,
        records: &RecordSet,
        analysis: &PortfolioAnalysis,
        settings: &Settings,
        output_path: &Path,
    ) -> Result<(), PnlscopeError>;
}
