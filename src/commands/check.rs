use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use py_header_auditor::config::load_config_from;
use py_header_auditor::header::scan;
use py_header_auditor::output::{format_human_output, missing_headers_message};
use py_header_auditor::project::{find_project_root, ROOT_MARKER_DIR};

pub fn handle_check(
    path: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    quiet: bool,
    verbose: bool,
    exit_zero: bool,
) -> Result<()> {
    // Explicit path wins; otherwise walk upward from the current
    // directory to the project root.
    let root = match path {
        Some(path) => path,
        None => find_project_root(&std::env::current_dir()?, ROOT_MARKER_DIR)?,
    };

    // Load configuration from the project's pyproject.toml
    let config = load_config_from(&root)?;
    let policy = config.policy();

    let report = scan(&root, &policy, verbose)?;

    // Determine output format
    let format = format.unwrap_or_else(|| match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Human,
    });

    // Generate output
    let output_content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };

    match output {
        Some(path) => fs::write(path, output_content)?,
        None => {
            if !quiet {
                println!("{}", output_content);
            }
        }
    }

    if !report.is_clean() {
        eprintln!("{}", missing_headers_message(&report)?);
        if !exit_zero {
            std::process::exit(1);
        }
    }

    Ok(())
}
