//! SVG charts embedded in the Typst report.
//!
//! Both charts return an empty string when there is nothing to plot so the
//! caller can substitute a placeholder sentence.

use crate::domain::format::format_currency;
use crate::domain::record::TradeRecord;
use crate::domain::risk_curve::RankedRiskCurve;

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 50.0;

const GAIN_COLOR: &str = "#16a34a";
const LOSS_COLOR: &str = "#dc2626";
const AXIS_COLOR: &str = "#ccc";
const LABEL_COLOR: &str = "#666";

fn plot_width() -> f64 {
    CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn open_svg(title: &str) -> String {
    let mut svg = format!(
        r##"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"##,
        w = CHART_WIDTH,
        h = CHART_HEIGHT
    );
    svg.push_str("\n  <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"18\" text-anchor=\"middle\" font-size=\"13\" fill=\"#333\">{}</text>\n",
        CHART_WIDTH / 2.0,
        escape(title)
    ));
    svg
}

fn axis_line(svg: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) {
    svg.push_str(&format!(
        "  <line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" stroke=\"{AXIS_COLOR}\" stroke-width=\"1\"/>\n"
    ));
}

fn label(svg: &mut String, x: f64, y: f64, anchor: &str, text: &str) {
    svg.push_str(&format!(
        "  <text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"{anchor}\" font-size=\"10\" fill=\"{LABEL_COLOR}\">{}</text>\n",
        escape(text)
    ));
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Bar chart of gains in the given order, green for gains and red for losses.
pub fn generate_pnl_bar_svg(records: &[&TradeRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let max = records.iter().map(|r| r.gain).fold(0.0_f64, f64::max);
    let min = records.iter().map(|r| r.gain).fold(0.0_f64, f64::min);
    let range = (max - min).max(1.0);

    let y_scale = |v: f64| MARGIN_TOP + plot_height() - ((v - min) / range) * plot_height();
    let zero_y = y_scale(0.0);
    let slot = plot_width() / records.len() as f64;
    let bar_width = (slot * 0.8).max(1.0);

    let mut svg = open_svg("PnL by Ticker");
    axis_line(&mut svg, MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, CHART_HEIGHT - MARGIN_BOTTOM);
    axis_line(&mut svg, MARGIN_LEFT, zero_y, CHART_WIDTH - MARGIN_RIGHT, zero_y);
    label(&mut svg, MARGIN_LEFT - 5.0, MARGIN_TOP + 5.0, "end", &format_currency(max));
    label(
        &mut svg,
        MARGIN_LEFT - 5.0,
        CHART_HEIGHT - MARGIN_BOTTOM,
        "end",
        &format_currency(min),
    );

    // Ticker labels get crowded past a few dozen bars.
    let show_labels = records.len() <= 40;

    for (i, record) in records.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = y_scale(record.gain);
        let (top, height) = if y < zero_y { (y, zero_y - y) } else { (zero_y, y - zero_y) };
        let color = if record.gain >= 0.0 { GAIN_COLOR } else { LOSS_COLOR };
        svg.push_str(&format!(
            "  <rect x=\"{x:.1}\" y=\"{top:.1}\" width=\"{bar_width:.1}\" height=\"{height:.1}\" fill=\"{color}\"/>\n"
        ));
        if show_labels {
            label(
                &mut svg,
                x + bar_width / 2.0,
                CHART_HEIGHT - MARGIN_BOTTOM + 14.0,
                "middle",
                &record.ticker,
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Cumulative absolute-PnL share against the number of top tickers, with a
/// dashed reference line per band.
pub fn generate_concentration_svg(curve: &RankedRiskCurve, bands: &[f64]) -> String {
    if curve.is_empty() {
        return String::new();
    }

    let n = curve.len();
    let x_scale = |rank: usize| {
        MARGIN_LEFT + ((rank - 1) as f64 / (n - 1).max(1) as f64) * plot_width()
    };
    let y_scale = |share: f64| MARGIN_TOP + plot_height() - share.clamp(0.0, 1.0) * plot_height();

    let mut svg = open_svg("Cumulative Absolute PnL Contribution");
    axis_line(&mut svg, MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, CHART_HEIGHT - MARGIN_BOTTOM);
    axis_line(
        &mut svg,
        MARGIN_LEFT,
        CHART_HEIGHT - MARGIN_BOTTOM,
        CHART_WIDTH - MARGIN_RIGHT,
        CHART_HEIGHT - MARGIN_BOTTOM,
    );
    label(&mut svg, MARGIN_LEFT - 5.0, y_scale(1.0) + 4.0, "end", "100%");
    label(&mut svg, MARGIN_LEFT - 5.0, y_scale(0.0), "end", "0%");
    label(&mut svg, MARGIN_LEFT, CHART_HEIGHT - MARGIN_BOTTOM + 14.0, "middle", "1");
    label(
        &mut svg,
        CHART_WIDTH - MARGIN_RIGHT,
        CHART_HEIGHT - MARGIN_BOTTOM + 14.0,
        "middle",
        &n.to_string(),
    );
    label(
        &mut svg,
        MARGIN_LEFT + plot_width() / 2.0,
        CHART_HEIGHT - 10.0,
        "middle",
        "Top N Tickers",
    );

    for &band in bands {
        let y = y_scale(band);
        svg.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#999\" stroke-dasharray=\"6 4\" stroke-width=\"1\"/>\n",
            MARGIN_LEFT,
            CHART_WIDTH - MARGIN_RIGHT
        ));
        label(
            &mut svg,
            CHART_WIDTH - MARGIN_RIGHT,
            y - 4.0,
            "end",
            &format!("{:.0}% Threshold", band * 100.0),
        );
    }

    let mut path = String::new();
    for row in &curve.rows {
        let cmd = if row.rank == 1 { "M" } else { " L" };
        path.push_str(&format!(
            "{cmd} {:.1} {:.1}",
            x_scale(row.rank),
            y_scale(row.cumulative_share)
        ));
    }
    svg.push_str(&format!(
        "  <path d=\"{path}\" fill=\"none\" stroke=\"#2563eb\" stroke-width=\"2\"/>\n"
    ));
    for row in &curve.rows {
        svg.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"#2563eb\"/>\n",
            x_scale(row.rank),
            y_scale(row.cumulative_share)
        ));
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordSet;
    use crate::domain::risk_curve::compute_risk_curve;

    fn records() -> Vec<TradeRecord> {
        vec![
            TradeRecord::new("AAA", 100.0),
            TradeRecord::new("CCC", 25.0),
            TradeRecord::new("B&B", -50.0),
        ]
    }

    #[test]
    fn bar_chart_empty() {
        assert_eq!(generate_pnl_bar_svg(&[]), "");
    }

    #[test]
    fn bar_chart_colours_by_sign() {
        let recs = records();
        let refs: Vec<&TradeRecord> = recs.iter().collect();
        let svg = generate_pnl_bar_svg(&refs);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches(GAIN_COLOR).count(), 2);
        assert_eq!(svg.matches(LOSS_COLOR).count(), 1);
        assert!(svg.contains("B&amp;B"));
        assert!(svg.contains("PnL by Ticker"));
    }

    #[test]
    fn concentration_chart_empty() {
        let curve = compute_risk_curve(&RecordSet::default());
        assert_eq!(generate_concentration_svg(&curve, &[0.5]), "");
    }

    #[test]
    fn concentration_chart_has_bands_and_points() {
        let curve = compute_risk_curve(&RecordSet::new(records()).unwrap());
        let svg = generate_concentration_svg(&curve, &[0.5, 0.75]);

        assert!(svg.contains("50% Threshold"));
        assert!(svg.contains("75% Threshold"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("stroke-dasharray").count(), 2);
        assert!(svg.contains("d=\"M 70.0"));
    }

    #[test]
    fn concentration_chart_single_point() {
        let curve =
            compute_risk_curve(&RecordSet::new(vec![TradeRecord::new("AAA", 5.0)]).unwrap());
        let svg = generate_concentration_svg(&curve, &[]);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(!svg.contains("Threshold"));
    }
}
