#![allow(dead_code)]

use pnlscope::domain::error::PnlscopeError;
use pnlscope::domain::record::{RecordSet, TradeRecord};
use pnlscope::domain::table::Table;
use pnlscope::ports::data_port::DataPort;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// In-memory data port keyed by path, recording every path it is asked for.
pub struct MockDataPort {
    pub tables: HashMap<PathBuf, Table>,
    pub errors: HashMap<PathBuf, String>,
    pub requested: RefCell<Vec<PathBuf>>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            errors: HashMap::new(),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn with_table(mut self, path: &str, table: Table) -> Self {
        self.tables.insert(PathBuf::from(path), table);
        self
    }

    pub fn with_error(mut self, path: &str, reason: &str) -> Self {
        self.errors.insert(PathBuf::from(path), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn load_table(&self, path: &Path) -> Result<Table, PnlscopeError> {
        self.requested.borrow_mut().push(path.to_path_buf());
        if let Some(reason) = self.errors.get(path) {
            return Err(PnlscopeError::Ingest {
                reason: reason.clone(),
            });
        }
        self.tables
            .get(path)
            .cloned()
            .ok_or_else(|| PnlscopeError::Ingest {
                reason: format!("no such file {}", path.display()),
            })
    }
}

pub fn make_records(rows: &[(&str, f64)]) -> RecordSet {
    RecordSet::new(rows.iter().map(|&(t, g)| TradeRecord::new(t, g)).collect()).unwrap()
}

/// AAA +100, BBB -50, CCC +25.
pub fn scenario_a() -> RecordSet {
    make_records(&[("AAA", 100.0), ("BBB", -50.0), ("CCC", 25.0)])
}

/// Two flat positions.
pub fn scenario_e() -> RecordSet {
    make_records(&[("AAA", 0.0), ("BBB", 0.0)])
}

/// A table with the default trading-master headers.
pub fn make_table(rows: &[(Option<&str>, Option<&str>)]) -> Table {
    Table::new(
        vec!["Ticker".to_string(), "Master Gain".to_string()],
        rows.iter()
            .map(|(t, g)| vec![t.map(str::to_string), g.map(str::to_string)])
            .collect(),
    )
}

pub fn write_temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn write_temp_csv(content: &str) -> tempfile::NamedTempFile {
    write_temp_file(".csv", content)
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    write_temp_file(".ini", content)
}

pub const SCENARIO_A_CSV: &str = "\
Ticker,Master Gain,Total Gain,Calc Gain
AAA,100,110,100
BBB,-50,-45,
CCC,25,30,25
";
