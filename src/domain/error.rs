//! Domain error types.

/// Top-level error type for pnlscope.
#[derive(Debug, thiserror::Error)]
pub enum PnlscopeError {
    #[error("empty input: {operation} needs at least one record")]
    EmptyInput { operation: &'static str },

    #[error("row {row}: missing {field}")]
    MissingField { row: usize, field: String },

    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    #[error("row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("unknown ticker {ticker}")]
    UnknownTicker { ticker: String },

    #[error("unsupported input format: {path} (expected a .csv file)")]
    UnsupportedFormat { path: String },

    #[error("ingest error: {reason}")]
    Ingest { reason: String },

    #[error("export to {path} failed: {reason}")]
    Export { path: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PnlscopeError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        PnlscopeError::EmptyInput { operation }
    }

    pub(crate) fn missing(row: usize, field: &str) -> Self {
        PnlscopeError::MissingField {
            row,
            field: field.to_string(),
        }
    }
}

impl From<&PnlscopeError> for std::process::ExitCode {
    fn from(err: &PnlscopeError) -> Self {
        let code: u8 = match err {
            PnlscopeError::Io(_) | PnlscopeError::Export { .. } => 1,
            PnlscopeError::ConfigParse { .. } | PnlscopeError::ConfigInvalid { .. } => 2,
            PnlscopeError::UnsupportedFormat { .. }
            | PnlscopeError::Ingest { .. }
            | PnlscopeError::MissingColumn { .. } => 3,
            PnlscopeError::MissingField { .. } | PnlscopeError::InvalidValue { .. } => 4,
            PnlscopeError::EmptyInput { .. } | PnlscopeError::UnknownTicker { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
