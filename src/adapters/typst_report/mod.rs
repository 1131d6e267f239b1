//! Typst report generation.
//!
//! Reads a Typst template (either the built-in default or a custom file via
//! `[report] template_path`), resolves all `{{PLACEHOLDER}}` markers by calling
//! helpers from `chart_svg` and `tables`, and writes the final `.typ` file.

pub mod chart_svg;
pub mod default_template;
pub mod tables;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::adapters::text_report::concentration_message;
use crate::domain::analysis::PortfolioAnalysis;
use crate::domain::error::PnlscopeError;
use crate::domain::record::{RecordSet, TradeRecord};
use crate::domain::settings::Settings;
use crate::domain::ticker::top_by_gain;
use crate::ports::report_port::ReportPort;

/// Context for resolving template placeholders.
pub struct ReportContext<'a> {
    pub analysis: &'a PortfolioAnalysis,
    pub settings: &'a Settings,
    /// Every record ordered by gain, highest first.
    pub ranked: Vec<&'a TradeRecord>,
    pub generated_at: DateTime<Local>,
}

/// Resolve all `{{PLACEHOLDER}}`s in the given template string and return
/// the final Typst markup.
pub fn resolve(template: &str, ctx: &ReportContext) -> String {
    let mut output = template.to_string();

    output = output.replace(
        "{{TITLE}}",
        &tables::escape_content(&ctx.settings.report_title),
    );
    output = output.replace(
        "{{GENERATED_AT}}",
        &ctx.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    );

    let insight = ctx
        .analysis
        .insight
        .to_string()
        .lines()
        .map(tables::escape_content)
        .collect::<Vec<_>>()
        .join("\n\n");
    output = output.replace("{{INSIGHT}}", &insight);

    output = output.replace(
        "{{METRICS_TABLE}}",
        &tables::render_metrics_table(ctx.analysis),
    );

    let pnl_svg = chart_svg::generate_pnl_bar_svg(&ctx.ranked);
    output = output.replace("{{PNL_CHART_SVG}}", &embed_svg(&pnl_svg, "_No PnL data._"));

    let top_n = ctx.settings.top_n.min(ctx.ranked.len());
    output = output.replace(
        "{{TOP_TABLE}}",
        &tables::render_top_table(&ctx.ranked[..top_n]),
    );

    let curve = &ctx.analysis.risk_curve;
    let conc_svg = chart_svg::generate_concentration_svg(curve, &ctx.settings.risk_bands);
    output = output.replace(
        "{{CONCENTRATION_CHART_SVG}}",
        &embed_svg(&conc_svg, "_No concentration data._"),
    );

    output = output.replace(
        "{{CONCENTRATION_NOTE}}",
        &format!(
            "*{}*",
            tables::escape_content(&concentration_message(
                curve,
                ctx.settings.concentration_threshold
            ))
        ),
    );

    output = output.replace("{{RISK_TABLE}}", &tables::render_risk_table(curve));

    output
}

fn embed_svg(svg: &str, fallback: &str) -> String {
    if svg.is_empty() {
        fallback.to_string()
    } else {
        format!(
            "#image.decode(\n\"{}\",\n  width: 100%,\n)",
            svg.replace('\\', "\\\\").replace('"', "\\\"")
        )
    }
}

pub struct TypstReportAdapter;

impl TypstReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TypstReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for TypstReportAdapter {
    fn write(
        &self,
        records: &RecordSet,
        analysis: &PortfolioAnalysis,
        settings: &Settings,
        output_path: &Path,
    ) -> Result<(), PnlscopeError> {
        let template = match settings.template_path.as_deref() {
            Some(path) => fs::read_to_string(path).map_err(|e| PnlscopeError::ConfigInvalid {
                section: "report".into(),
                key: "template_path".into(),
                reason: format!("cannot read {path}: {e}"),
            })?,
            None => default_template::DEFAULT_TEMPLATE.to_string(),
        };

        let ctx = ReportContext {
            analysis,
            settings,
            ranked: top_by_gain(records, records.len()),
            generated_at: Local::now(),
        };
        fs::write(output_path, resolve(&template, &ctx))?;

        tracing::info!(path = %output_path.display(), "wrote typst report");
        Ok(())
    }
}
