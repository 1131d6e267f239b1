//! pnlscope: portfolio performance and concentration analytics over a table
//! of per-ticker trading results.
//!
//! Hexagonal architecture: the metrics engine and its types live in
//! [`domain`], port traits in [`ports`], concrete file formats and renderers
//! in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;

pub use domain::aggregate::{compute_aggregate_metrics, AggregateMetrics};
pub use domain::error::PnlscopeError;
pub use domain::insight::{generate_insight, InsightSummary};
pub use domain::record::{RawRecord, RecordSet, TradeRecord};
pub use domain::risk_curve::{compute_risk_curve, RankedRiskCurve, RiskCurveRow};
pub use domain::win_loss::{compute_win_loss, WinLossStats};
