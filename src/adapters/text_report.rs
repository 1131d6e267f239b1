//! Plain-text rendering of the dashboard views for the terminal.
//!
//! Formatting and concentration labelling live here, not in the engine: the
//! engine hands over raw numbers and this module decides how they read.

use crate::domain::analysis::PortfolioAnalysis;
use crate::domain::audit::AuditReport;
use crate::domain::format::{format_currency, format_percent, format_ratio, format_signed_currency};
use crate::domain::record::TradeRecord;
use crate::domain::risk_curve::{RankedRiskCurve, TOP_CONCENTRATION_COUNT};
use crate::domain::settings::Settings;
use crate::domain::ticker::TickerDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcentrationLevel {
    Concentrated,
    Diversified,
}

impl ConcentrationLevel {
    pub fn classify(top3_share: f64, threshold: f64) -> Self {
        if top3_share > threshold {
            ConcentrationLevel::Concentrated
        } else {
            ConcentrationLevel::Diversified
        }
    }
}

pub fn concentration_message(curve: &RankedRiskCurve, threshold: f64) -> String {
    let share = format_percent(curve.top3_share, 1);
    match ConcentrationLevel::classify(curve.top3_share, threshold) {
        ConcentrationLevel::Concentrated => format!(
            "High concentration: top {TOP_CONCENTRATION_COUNT} tickers drive {share} of total portfolio risk"
        ),
        ConcentrationLevel::Diversified => format!(
            "Diversified: top {TOP_CONCENTRATION_COUNT} tickers drive {share} of total portfolio risk"
        ),
    }
}

pub fn render_overview(analysis: &PortfolioAnalysis, ranked: &[&TradeRecord]) -> String {
    let agg = &analysis.aggregate;
    let wl = &analysis.win_loss;
    let mut out = String::from("Overview\n========\n\n");

    let rows = [
        ("Total PnL", format_currency(agg.total_pnl)),
        ("Avg PnL / Ticker", format_currency(agg.avg_pnl)),
        ("Win Rate", format_percent(agg.win_rate, 1)),
        ("Tickers Traded", agg.num_tickers.to_string()),
        ("Top Ticker Contribution", format_percent(agg.top_contribution, 1)),
        ("Avg Winning Trade", format_currency(wl.avg_win)),
        ("Avg Losing Trade", format_currency(wl.avg_loss)),
        ("Profit Factor", format_ratio(wl.profit_factor)),
    ];
    for (label, value) in rows {
        out.push_str(&format!("{label:<24} {value:>16}\n"));
    }

    out.push_str(&format!("\n{}\n\n", analysis.insight));

    out.push_str("PnL by Ticker\n-------------\n");
    out.push_str(&render_gain_list(ranked));
    out
}

pub fn render_ticker(detail: &TickerDetail, top: &[&TradeRecord]) -> String {
    let mut out = format!("{} Performance\n", detail.ticker);
    out.push_str(&"=".repeat(out.len() - 1));
    out.push_str("\n\n");

    out.push_str(&format!("{:<24} {:>16}\n", "PnL", format_currency(detail.gain)));
    out.push_str(&format!(
        "{:<24} {:>16}\n",
        "Portfolio Contribution",
        format_percent(detail.contribution, 2)
    ));
    out.push_str(&format!(
        "{:<24} {:>16}\n",
        "Rank",
        format!("{} of {}", detail.rank, detail.universe)
    ));

    out.push_str(&format!("\nTop {} Tickers by PnL\n", top.len()));
    out.push_str("--------------------\n");
    out.push_str(&render_gain_list(top));
    out
}

pub fn render_risk(curve: &RankedRiskCurve, settings: &Settings) -> String {
    let mut out = String::from("Concentration & Risk\n====================\n\n");

    if curve.is_empty() {
        out.push_str("No positions to rank.\n");
        return out;
    }

    out.push_str(&format!(
        "{:>4}  {:<10} {:>16} {:>10} {:>12}\n",
        "Rank", "Ticker", "PnL", "Share", "Cumulative"
    ));
    for row in &curve.rows {
        out.push_str(&format!(
            "{:>4}  {:<10} {:>16} {:>10} {:>12}\n",
            row.rank,
            row.ticker,
            format_currency(row.gain),
            format_percent(row.contribution_share, 1),
            format_percent(row.cumulative_share, 1)
        ));
    }

    out.push('\n');
    for &band in &settings.risk_bands {
        let reached = match curve.tickers_to_reach(band) {
            Some(n) => format!("reached by top {n}"),
            None => "not reached".to_string(),
        };
        out.push_str(&format!("{} threshold: {}\n", format_percent(band, 0), reached));
    }

    out.push_str(&format!(
        "\n{}\n",
        concentration_message(curve, settings.concentration_threshold)
    ));
    out
}

pub fn render_audit(report: &AuditReport) -> String {
    let mut out = String::from("Data Audit\n==========\n\n");
    out.push_str(&format!("Rows: {}\n\n", report.rows));

    out.push_str("Missing Values\n--------------\n");
    for m in &report.missing {
        out.push_str(&format!("{:<24} {:>8}\n", m.column, m.missing));
    }

    if report.numeric.is_empty() {
        return out;
    }

    out.push_str("\nDescriptive Statistics\n----------------------\n");
    out.push_str(&format!("{:<8}", ""));
    for col in &report.numeric {
        out.push_str(&format!(" {:>16}", col.column));
    }
    out.push('\n');

    out.push_str(&format!("{:<8}", "count"));
    for col in &report.numeric {
        out.push_str(&format!(" {:>16}", col.count));
    }
    out.push('\n');

    let labels = ["mean", "std", "min", "25%", "50%", "75%", "max"];
    for (i, label) in labels.iter().enumerate() {
        out.push_str(&format!("{label:<8}"));
        for col in &report.numeric {
            let value = col.stats.as_ref().and_then(|s| match i {
                0 => Some(s.mean),
                1 => s.std,
                2 => Some(s.min),
                3 => Some(s.q25),
                4 => Some(s.median),
                5 => Some(s.q75),
                _ => Some(s.max),
            });
            let cell = value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "NaN".into());
            out.push_str(&format!(" {cell:>16}"));
        }
        out.push('\n');
    }
    out
}

fn render_gain_list(records: &[&TradeRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<10} {:>16}\n",
            i + 1,
            record.ticker,
            format_signed_currency(record.gain)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::analyze;
    use crate::domain::audit::audit_table;
    use crate::domain::record::RecordSet;
    use crate::domain::risk_curve::compute_risk_curve;
    use crate::domain::table::Table;
    use crate::domain::ticker::{ticker_detail, top_by_gain};

    fn scenario() -> RecordSet {
        RecordSet::new(vec![
            TradeRecord::new("AAA", 100.0),
            TradeRecord::new("BBB", -50.0),
            TradeRecord::new("CCC", 25.0),
        ])
        .unwrap()
    }

    #[test]
    fn classify_threshold_is_strict() {
        assert_eq!(
            ConcentrationLevel::classify(0.51, 0.5),
            ConcentrationLevel::Concentrated
        );
        assert_eq!(
            ConcentrationLevel::classify(0.5, 0.5),
            ConcentrationLevel::Diversified
        );
    }

    #[test]
    fn overview_lists_metrics_and_insight() {
        let records = scenario();
        let analysis = analyze(&records).unwrap();
        let text = render_overview(&analysis, &top_by_gain(&records, 10));

        assert!(text.contains("$75.00"));
        assert!(text.contains("66.7%"));
        assert!(text.contains("133.3%"));
        assert!(text.contains("2.50"));
        assert!(text.contains("Top performer: AAA (+$100.00)"));
        let aaa = text.find("AAA   ").unwrap();
        let ccc = text.find("CCC   ").unwrap();
        assert!(aaa < ccc);
    }

    #[test]
    fn overview_shows_infinite_profit_factor() {
        let records = RecordSet::new(vec![TradeRecord::new("AAA", 5.0)]).unwrap();
        let analysis = analyze(&records).unwrap();
        let text = render_overview(&analysis, &top_by_gain(&records, 10));
        assert!(text.contains("inf"));
    }

    #[test]
    fn ticker_view_shows_rank_and_contribution() {
        let records = scenario();
        let detail = ticker_detail(&records, "CCC").unwrap();
        let text = render_ticker(&detail, &top_by_gain(&records, 2));

        assert!(text.starts_with("CCC Performance\n==============="));
        assert!(text.contains("33.33%"));
        assert!(text.contains("2 of 3"));
        assert!(text.contains("Top 2 Tickers by PnL"));
        assert!(!text.contains("BBB"));
    }

    #[test]
    fn risk_view_labels_concentration() {
        let curve = compute_risk_curve(&scenario());
        let text = render_risk(&curve, &Settings::default());

        assert!(text.contains("57.1%"));
        assert!(text.contains("50% threshold: reached by top 1"));
        assert!(text.contains("75% threshold: reached by top 2"));
        assert!(text.contains("High concentration: top 3 tickers drive 100.0%"));
    }

    #[test]
    fn risk_view_full_band_is_reached() {
        let records = RecordSet::new(vec![
            TradeRecord::new("AAA", 48.41),
            TradeRecord::new("BBB", 52.81),
        ])
        .unwrap();
        let settings = Settings {
            risk_bands: vec![1.0],
            ..Settings::default()
        };
        let text = render_risk(&compute_risk_curve(&records), &settings);

        assert!(text.contains("100% threshold: reached by top 2"));
        assert!(!text.contains("not reached"));
    }

    #[test]
    fn risk_view_diversified() {
        let records = RecordSet::new(
            (0..10)
                .map(|i| TradeRecord::new(format!("T{i}"), 10.0))
                .collect(),
        )
        .unwrap();
        let text = render_risk(&compute_risk_curve(&records), &Settings::default());
        assert!(text.contains("Diversified: top 3 tickers drive 30.0%"));
    }

    #[test]
    fn risk_view_empty_curve() {
        let text = render_risk(&compute_risk_curve(&RecordSet::default()), &Settings::default());
        assert!(text.contains("No positions to rank."));
    }

    #[test]
    fn audit_view_prints_nan_for_missing_std() {
        let table = Table::new(
            vec!["Ticker".into(), "Master Gain".into()],
            vec![vec![Some("AAA".into()), Some("4".into())]],
        );
        let report = audit_table(&table, &["Master Gain"]).unwrap();
        let text = render_audit(&report);

        assert!(text.contains("Missing Values"));
        assert!(text.contains("Descriptive Statistics"));
        assert!(text.contains("NaN"));
        assert!(text.contains("4.00"));
    }
}
