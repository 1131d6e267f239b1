//! All four engine outputs for one record-set snapshot.

use super::aggregate::{compute_aggregate_metrics, AggregateMetrics};
use super::error::PnlscopeError;
use super::insight::{generate_insight, InsightSummary};
use super::record::RecordSet;
use super::risk_curve::{compute_risk_curve, RankedRiskCurve};
use super::win_loss::{compute_win_loss, WinLossStats};

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioAnalysis {
    pub aggregate: AggregateMetrics,
    pub win_loss: WinLossStats,
    pub risk_curve: RankedRiskCurve,
    pub insight: InsightSummary,
}

pub fn analyze(records: &RecordSet) -> Result<PortfolioAnalysis, PnlscopeError> {
    let aggregate = compute_aggregate_metrics(records)?;
    let win_loss = compute_win_loss(records);
    let risk_curve = compute_risk_curve(records);
    let insight = generate_insight(records)?;

    tracing::debug!(
        records = records.len(),
        total_pnl = aggregate.total_pnl,
        win_rate = aggregate.win_rate,
        top3_share = risk_curve.top3_share,
        "analysed record set"
    );

    Ok(PortfolioAnalysis {
        aggregate,
        win_loss,
        risk_curve,
        insight,
    })
}
