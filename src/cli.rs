//! CLI definition and dispatch: one subcommand per dashboard view.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{Args, Parser, Subcommand};

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report;
use crate::adapters::typst_report::TypstReportAdapter;
use crate::domain::analysis::analyze;
use crate::domain::audit::audit_table;
use crate::domain::error::PnlscopeError;
use crate::domain::record::RecordSet;
use crate::domain::risk_curve::compute_risk_curve;
use crate::domain::settings::Settings;
use crate::domain::table::Table;
use crate::domain::ticker::{ticker_detail, top_by_gain, unique_tickers};
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

const SPREADSHEET_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

#[derive(Parser, Debug)]
#[command(name = "pnlscope", about = "Trading performance and concentration dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Trading master file (CSV)
    #[arg(short, long)]
    pub input: PathBuf,
    /// INI configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Headline metrics, insight and PnL by ticker
    Overview {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Deep dive into one ticker, or list tickers when none is given
    Ticker {
        #[command(flatten)]
        input: InputArgs,
        #[arg(short, long)]
        ticker: Option<String>,
    },
    /// Ranked concentration curve
    Risk {
        #[command(flatten)]
        input: InputArgs,
        /// Write the ranked curve to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Missing values and descriptive statistics
    Audit {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Write a Typst report
    Report {
        #[command(flatten)]
        input: InputArgs,
        #[arg(short, long)]
        output: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match execute(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn execute(cli: Cli, out: &mut dyn Write) -> Result<(), PnlscopeError> {
    match cli.command {
        Command::Overview { input } => run_overview(&input, out),
        Command::Ticker { input, ticker } => run_ticker(&input, ticker.as_deref(), out),
        Command::Risk { input, export } => run_risk(&input, export.as_deref(), out),
        Command::Audit { input } => run_audit(&input, out),
        Command::Report { input, output } => run_report(&input, &output, out),
    }
}

pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, PnlscopeError> {
    match config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            let adapter = FileConfigAdapter::from_file(path)?;
            Settings::from_config(&adapter)
        }
        None => Ok(Settings::default()),
    }
}

/// Load the input file and drop rows without a ticker.
pub fn load_table(path: &Path, settings: &Settings) -> Result<Table, PnlscopeError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        return Err(PnlscopeError::UnsupportedFormat {
            path: path.display().to_string(),
        });
    }

    let table = CsvAdapter::new()
        .with_delimiter(settings.delimiter)
        .load_table(path)?;
    let (table, dropped) = table.retain_present(&settings.ticker_column)?;
    if dropped > 0 {
        tracing::warn!(dropped, "ignoring rows without a ticker");
    }
    Ok(table)
}

fn load(args: &InputArgs) -> Result<(Settings, Table, RecordSet), PnlscopeError> {
    let settings = load_settings(args.config.as_deref())?;
    let table = load_table(&args.input, &settings)?;
    let records = RecordSet::from_table(&table, &settings.ticker_column, &settings.gain_column)?;
    tracing::info!(records = records.len(), "records ready");
    Ok((settings, table, records))
}

fn write_caption(out: &mut dyn Write) -> Result<(), PnlscopeError> {
    writeln!(
        out,
        "\nLast updated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    Ok(())
}

fn run_overview(args: &InputArgs, out: &mut dyn Write) -> Result<(), PnlscopeError> {
    let (_, _, records) = load(args)?;
    let analysis = analyze(&records)?;
    let ranked = top_by_gain(&records, records.len());
    write!(out, "{}", text_report::render_overview(&analysis, &ranked))?;
    write_caption(out)
}

fn run_ticker(
    args: &InputArgs,
    ticker: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), PnlscopeError> {
    let (settings, _, records) = load(args)?;

    let Some(ticker) = ticker else {
        writeln!(out, "Available tickers:")?;
        for t in unique_tickers(&records) {
            writeln!(out, "  {t}")?;
        }
        return Ok(());
    };

    let detail = ticker_detail(&records, ticker)?;
    let top = top_by_gain(&records, settings.top_n);
    write!(out, "{}", text_report::render_ticker(&detail, &top))?;
    write_caption(out)
}

fn run_risk(
    args: &InputArgs,
    export: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), PnlscopeError> {
    let (settings, _, records) = load(args)?;
    let curve = compute_risk_curve(&records);
    write!(out, "{}", text_report::render_risk(&curve, &settings))?;

    if let Some(path) = export {
        CsvAdapter::new()
            .with_delimiter(settings.delimiter)
            .write_risk_curve(&curve, path)?;
        writeln!(out, "\nRisk curve written to {}", path.display())?;
    }
    write_caption(out)
}

fn run_audit(args: &InputArgs, out: &mut dyn Write) -> Result<(), PnlscopeError> {
    let settings = load_settings(args.config.as_deref())?;
    let table = load_table(&args.input, &settings)?;

    let columns: Vec<&str> = settings
        .audit_columns
        .iter()
        .map(String::as_str)
        .filter(|c| {
            let present = table.column_index(c).is_some();
            if !present {
                tracing::warn!(column = c, "audit column not in input, skipping");
            }
            present
        })
        .collect();

    let report = audit_table(&table, &columns)?;
    write!(out, "{}", text_report::render_audit(&report))?;
    write_caption(out)
}

fn run_report(args: &InputArgs, output: &Path, out: &mut dyn Write) -> Result<(), PnlscopeError> {
    let (settings, _, records) = load(args)?;
    let analysis = analyze(&records)?;
    TypstReportAdapter::new().write(&records, &analysis, &settings, output)?;
    writeln!(out, "Report written to {}", output.display())?;
    Ok(())
}
