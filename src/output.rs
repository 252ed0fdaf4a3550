use anyhow::Result;
use crate::header::ScanReport;

/// Human-readable summary: the checked-file count, mirroring the
/// original check's success line.
pub fn format_human_output(report: &ScanReport) -> String {
    format!("checked {} files successfully.", report.files_checked)
}

/// Failure message carrying every offending path in one shot, with the
/// list serialized as JSON strings.
pub fn missing_headers_message(report: &ScanReport) -> Result<String> {
    let paths = serde_json::to_string(&report.failing_paths())?;
    Ok(format!("Copyright headers are missing from files: {}", paths))
}
