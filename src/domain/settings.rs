//! Runtime settings read from the optional INI file, with validation.

use crate::domain::error::PnlscopeError;
use crate::ports::config_port::ConfigPort;

pub const DEFAULT_TICKER_COLUMN: &str = "Ticker";
pub const DEFAULT_GAIN_COLUMN: &str = "Master Gain";
pub const DEFAULT_AUDIT_COLUMNS: [&str; 3] = ["Master Gain", "Total Gain", "Calc Gain"];
pub const DEFAULT_CONCENTRATION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_RISK_BANDS: [f64; 2] = [0.5, 0.75];
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_REPORT_TITLE: &str = "Trading Performance Report";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ticker_column: String,
    pub gain_column: String,
    pub audit_columns: Vec<String>,
    pub delimiter: u8,
    /// `top3_share` above this is labelled concentrated.
    pub concentration_threshold: f64,
    /// Reference lines drawn on the cumulative concentration chart.
    pub risk_bands: Vec<f64>,
    pub top_n: usize,
    pub report_title: String,
    pub template_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            ticker_column: DEFAULT_TICKER_COLUMN.to_string(),
            gain_column: DEFAULT_GAIN_COLUMN.to_string(),
            audit_columns: DEFAULT_AUDIT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            delimiter: b',',
            concentration_threshold: DEFAULT_CONCENTRATION_THRESHOLD,
            risk_bands: DEFAULT_RISK_BANDS.to_vec(),
            top_n: DEFAULT_TOP_N,
            report_title: DEFAULT_REPORT_TITLE.to_string(),
            template_path: None,
        }
    }
}

impl Settings {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, PnlscopeError> {
        let defaults = Settings::default();

        let ticker_column = config
            .get_string("columns", "ticker")
            .unwrap_or(defaults.ticker_column);
        require_non_empty("columns", "ticker", &ticker_column)?;

        let gain_column = config
            .get_string("columns", "gain")
            .unwrap_or(defaults.gain_column);
        require_non_empty("columns", "gain", &gain_column)?;

        let audit_columns = config
            .get_list("columns", "audit")
            .unwrap_or(defaults.audit_columns);

        let delimiter = match config.get_string("input", "delimiter") {
            Some(raw) => parse_delimiter(&raw)?,
            None => defaults.delimiter,
        };

        let concentration_threshold = config.get_double(
            "risk",
            "concentration_threshold",
            defaults.concentration_threshold,
        );
        require_fraction("risk", "concentration_threshold", concentration_threshold)?;

        let risk_bands = match config.get_list("risk", "bands") {
            Some(raw) => parse_bands(&raw)?,
            None => defaults.risk_bands,
        };

        let top_n = config.get_int("display", "top_n", defaults.top_n as i64);
        if top_n < 1 {
            return Err(invalid("display", "top_n", "top_n must be at least 1"));
        }

        let report_title = config
            .get_string("report", "title")
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(defaults.report_title);

        let template_path = config
            .get_string("report", "template_path")
            .filter(|p| !p.trim().is_empty());

        Ok(Settings {
            ticker_column,
            gain_column,
            audit_columns,
            delimiter,
            concentration_threshold,
            risk_bands,
            top_n: top_n as usize,
            report_title,
            template_path,
        })
    }
}

fn invalid(section: &str, key: &str, reason: &str) -> PnlscopeError {
    PnlscopeError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn require_non_empty(section: &str, key: &str, value: &str) -> Result<(), PnlscopeError> {
    if value.trim().is_empty() {
        return Err(invalid(section, key, "column name must not be empty"));
    }
    Ok(())
}

fn require_fraction(section: &str, key: &str, value: f64) -> Result<(), PnlscopeError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(invalid(section, key, "value must be in (0, 1]"));
    }
    Ok(())
}

fn parse_delimiter(raw: &str) -> Result<u8, PnlscopeError> {
    let value = match raw.trim() {
        "tab" | "\\t" => "\t",
        "" => ",",
        other => other,
    };
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(invalid(
            "input",
            "delimiter",
            "delimiter must be a single ASCII character",
        )),
    }
}

fn parse_bands(raw: &[String]) -> Result<Vec<f64>, PnlscopeError> {
    let mut bands = Vec::with_capacity(raw.len());
    for item in raw {
        let band: f64 = item
            .parse()
            .map_err(|_| invalid("risk", "bands", &format!("'{item}' is not a number")))?;
        require_fraction("risk", "bands", band)?;
        bands.push(band);
    }
    bands.sort_by(f64::total_cmp);
    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn from_ini(content: &str) -> Result<Settings, PnlscopeError> {
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        Settings::from_config(&adapter)
    }

    #[test]
    fn defaults_when_config_is_empty() {
        let settings = from_ini("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.gain_column, "Master Gain");
        assert_eq!(settings.audit_columns.len(), 3);
    }

    #[test]
    fn reads_all_sections() {
        let settings = from_ini(
            r#"
[columns]
ticker = Symbol
gain = Net PnL
audit = Net PnL, Fees

[input]
delimiter = |

[risk]
concentration_threshold = 0.6
bands = 0.9, 0.25

[display]
top_n = 5

[report]
title = Q3 Review
template_path = /tmp/custom.typ
"#,
        )
        .unwrap();

        assert_eq!(settings.ticker_column, "Symbol");
        assert_eq!(settings.gain_column, "Net PnL");
        assert_eq!(settings.audit_columns, vec!["Net PnL", "Fees"]);
        assert_eq!(settings.delimiter, b'|');
        assert_eq!(settings.concentration_threshold, 0.6);
        assert_eq!(settings.risk_bands, vec![0.25, 0.9]);
        assert_eq!(settings.top_n, 5);
        assert_eq!(settings.report_title, "Q3 Review");
        assert_eq!(settings.template_path.as_deref(), Some("/tmp/custom.typ"));
    }

    #[test]
    fn tab_delimiter() {
        let settings = from_ini("[input]\ndelimiter = tab\n").unwrap();
        assert_eq!(settings.delimiter, b'\t');
    }

    #[test]
    fn rejects_long_delimiter() {
        let err = from_ini("[input]\ndelimiter = ab\n").unwrap_err();
        assert!(matches!(err, PnlscopeError::ConfigInvalid { ref key, .. } if key == "delimiter"));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        for bad in ["0", "1.5", "-0.2"] {
            let err = from_ini(&format!("[risk]\nconcentration_threshold = {bad}\n")).unwrap_err();
            assert!(matches!(err, PnlscopeError::ConfigInvalid { ref key, .. } if key == "concentration_threshold"));
        }
    }

    #[test]
    fn rejects_bad_bands() {
        assert!(from_ini("[risk]\nbands = 0.5, lots\n").is_err());
        assert!(from_ini("[risk]\nbands = 0.5, 2\n").is_err());
    }

    #[test]
    fn rejects_zero_top_n() {
        let err = from_ini("[display]\ntop_n = 0\n").unwrap_err();
        assert!(matches!(err, PnlscopeError::ConfigInvalid { ref key, .. } if key == "top_n"));
    }
}
