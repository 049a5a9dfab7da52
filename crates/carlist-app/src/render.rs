//! Output rendering for query reports

use carlist_types::{OutputFormat, Result};

use crate::query_service::CatalogReport;

/// Render a report as a titled block with one line per record
pub fn render_table(report: &CatalogReport<'_>) -> String {
    let mut out = String::new();
    out.push_str(&report.title);
    out.push('\n');
    out.push_str(&"=".repeat(report.title.chars().count()));
    out.push('\n');
    if report.records.is_empty() {
        out.push_str("(no matching records)\n");
    }
    for car in &report.records {
        out.push_str(&car.to_string());
        out.push('\n');
    }
    out
}

/// Render several reports in the requested format
pub fn render_reports(reports: &[CatalogReport<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(reports
            .iter()
            .map(render_table)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}
