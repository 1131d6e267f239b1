//! Concentration ranking: how much of the absolute PnL the largest positions
//! account for.
//!
//! Records are ranked by absolute gain, largest first. Ties keep input order,
//! which decides both rank numbers and which tickers fall into the top three.
//! Shares are folded in ranked order so the cumulative column is reproducible.

use serde::Serialize;

use super::record::RecordSet;

/// Number of leading positions summed into [`RankedRiskCurve::top3_share`].
pub const TOP_CONCENTRATION_COUNT: usize = 3;

/// Slack for comparing running sums of shares, which can land a few ulps
/// short of a band such as 1.0.
pub const SHARE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskCurveRow {
    pub rank: usize,
    pub ticker: String,
    pub gain: f64,
    pub abs_gain: f64,
    pub contribution_share: f64,
    pub cumulative_share: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedRiskCurve {
    pub rows: Vec<RiskCurveRow>,
    pub total_abs: f64,
    pub top3_share: f64,
}

impl RankedRiskCurve {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Combined share of the first `n` ranked positions (all of them when
    /// fewer than `n` exist).
    pub fn top_n_share(&self, n: usize) -> f64 {
        self.rows
            .iter()
            .take(n)
            .fold(0.0, |acc, row| acc + row.contribution_share)
    }

    /// Smallest number of ranked positions whose cumulative share reaches
    /// `threshold`, or `None` if the curve never gets there. Shares within
    /// [`SHARE_TOLERANCE`] of the threshold count as reaching it.
    pub fn tickers_to_reach(&self, threshold: f64) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.cumulative_share + SHARE_TOLERANCE >= threshold)
            .map(|i| i + 1)
    }
}

pub fn compute_risk_curve(records: &RecordSet) -> RankedRiskCurve {
    let total_abs = records.iter().fold(0.0, |acc, r| acc + r.abs_gain());

    let mut ranked: Vec<_> = records.iter().collect();
    // sort_by is stable: equal absolute gains stay in input order.
    ranked.sort_by(|a, b| b.abs_gain().total_cmp(&a.abs_gain()));

    let mut cumulative = 0.0_f64;
    let rows: Vec<RiskCurveRow> = ranked
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let abs_gain = record.abs_gain();
            let contribution_share = if total_abs > 0.0 {
                abs_gain / total_abs
            } else {
                0.0
            };
            cumulative += contribution_share;
            RiskCurveRow {
                rank: i + 1,
                ticker: record.ticker.clone(),
                gain: record.gain,
                abs_gain,
                contribution_share,
                cumulative_share: cumulative,
            }
        })
        .collect();

    let mut curve = RankedRiskCurve {
        rows,
        total_abs,
        top3_share: 0.0,
    };
    curve.top3_share = curve.top_n_share(TOP_CONCENTRATION_COUNT);
    curve
}
