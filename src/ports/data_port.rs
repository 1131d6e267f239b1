//! Data access port trait.

use std::path::Path;

use crate::domain::error::PnlscopeError;
use crate::domain::table::Table;

pub trait DataPort {
    /// Read a trading-master file into a raw table.
    fn load_table(&self, path: &Path) -> Result<Table, PnlscopeError>;
}
