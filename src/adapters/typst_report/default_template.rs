//! Built-in Typst report template with `{{PLACEHOLDER}}` markers.

pub const DEFAULT_TEMPLATE: &str = r#"#set page(paper: "a4", margin: 2cm)
#set text(size: 10pt)

= {{TITLE}}

_Generated {{GENERATED_AT}}_

== Summary

{{INSIGHT}}

== Performance Metrics

{{METRICS_TABLE}}

== PnL by Ticker

{{PNL_CHART_SVG}}

== Top Tickers

{{TOP_TABLE}}

== Concentration & Risk

{{CONCENTRATION_CHART_SVG}}

{{CONCENTRATION_NOTE}}

{{RISK_TABLE}}
"#;

/// Every marker the default template uses, in document order.
pub const PLACEHOLDERS: [&str; 9] = [
    "{{TITLE}}",
    "{{GENERATED_AT}}",
    "{{INSIGHT}}",
    "{{METRICS_TABLE}}",
    "{{PNL_CHART_SVG}}",
    "{{TOP_TABLE}}",
    "{{CONCENTRATION_CHART_SVG}}",
    "{{CONCENTRATION_NOTE}}",
    "{{RISK_TABLE}}",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_contains_every_placeholder_once() {
        for marker in PLACEHOLDERS {
            assert_eq!(DEFAULT_TEMPLATE.matches(marker).count(), 1, "{marker}");
        }
    }
}
