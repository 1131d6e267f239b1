//! Concrete adapter implementations for ports, plus terminal rendering.

pub mod csv_adapter;
pub mod file_config_adapter;
pub mod text_report;
pub mod typst_report;
