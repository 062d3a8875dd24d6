use crate::scan::ScanReport;

/// Render the report as pretty-printed JSON (trailing newline included).
pub fn render_json_report(report: &ScanReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
