//! Table markup for the Typst report.
//!
//! Provides functions to generate Typst markup for:
//! - Headline metrics table
//! - Ranked risk table
//! - Top-N gain table

use crate::domain::analysis::PortfolioAnalysis;
use crate::domain::format::{format_currency, format_percent, format_ratio, format_signed_currency};
use crate::domain::record::TradeRecord;
use crate::domain::risk_curve::RankedRiskCurve;

/// Escape characters Typst treats as markup inside content blocks.
pub fn escape_content(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '[' | ']' | '#' | '$' | '*' | '_' | '@' | '<' | '>' | '`') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

pub fn render_metrics_table(analysis: &PortfolioAnalysis) -> String {
    let agg = &analysis.aggregate;
    let wl = &analysis.win_loss;

    let rows = [
        ("Total PnL", format_currency(agg.total_pnl)),
        ("Avg PnL / Ticker", format_currency(agg.avg_pnl)),
        ("Win Rate", format_percent(agg.win_rate, 1)),
        ("Tickers Traded", agg.num_tickers.to_string()),
        ("Top Ticker Contribution", format_percent(agg.top_contribution, 1)),
        ("Winning / Losing / Flat", format!("{} / {} / {}", wl.wins, wl.losses, wl.breakeven)),
        ("Avg Winning Trade", format_currency(wl.avg_win)),
        ("Avg Losing Trade", format_currency(wl.avg_loss)),
        ("Gross Profit", format_currency(wl.gross_profit)),
        ("Gross Loss", format_currency(wl.gross_loss)),
        ("Profit Factor", format_ratio(wl.profit_factor)),
    ];

    let mut out = String::from("#table(\n  columns: 2,\n  align: (left, right),\n");
    out.push_str("  [*Metric*], [*Value*],\n");
    for (label, value) in rows {
        out.push_str(&format!("  [{}], [{}],\n", label, escape_content(&value)));
    }
    out.push(')');
    out
}

pub fn render_risk_table(curve: &RankedRiskCurve) -> String {
    if curve.is_empty() {
        return "_No positions to rank._".to_string();
    }

    let mut out = String::from(
        "#table(\n  columns: 5,\n  align: (right, left, right, right, right),\n",
    );
    out.push_str("  [*Rank*], [*Ticker*], [*PnL*], [*Share*], [*Cumulative*],\n");
    for row in &curve.rows {
        let pnl_color = if row.gain >= 0.0 { "green" } else { "red" };
        out.push_str(&format!(
            "  [{}], [{}], text(fill: {}, [{}]), [{}], [{}],\n",
            row.rank,
            escape_content(&row.ticker),
            pnl_color,
            escape_content(&format_currency(row.gain)),
            escape_content(&format_percent(row.contribution_share, 1)),
            escape_content(&format_percent(row.cumulative_share, 1)),
        ));
    }
    out.push(')');
    out
}

pub fn render_top_table(records: &[&TradeRecord]) -> String {
    if records.is_empty() {
        return "_No tickers._".to_string();
    }

    let mut out = String::from("#table(\n  columns: 3,\n  align: (right, left, right),\n");
    out.push_str("  [*\\#*], [*Ticker*], [*PnL*],\n");
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "  [{}], [{}], [{}],\n",
            i + 1,
            escape_content(&record.ticker),
            escape_content(&format_signed_currency(record.gain)),
        ));
    }
    out.push(')');
    out
}
