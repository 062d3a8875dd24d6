use crate::scan::ScanReport;

use std::fmt::Write;

/// Render the line-oriented console report.
pub fn render_text_report(report: &ScanReport) -> anyhow::Result<String> {
    let mut out = String::new();

    writeln!(out, "Function selectors:")?;
    for entry in &report.selectors {
        writeln!(out, "{}: {}", entry.signature, entry.selector)?;
    }

    writeln!(out)?;
    writeln!(out, "Checking if {} matches any function...", report.target)?;
    if let Some(sig) = &report.matched {
        writeln!(out, "MATCH: {} is {}", report.target, sig)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Correct selector for {}: {}",
        report.reference.signature, report.reference.selector
    )?;

    Ok(out)
}
