use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{HeaderPolicy, HeaderStatus, ScanReport, MAX_HEADER_LINES, VERSION_FILE_NAME};

lazy_static! {
    /// Marker that proves a version-stamp file is machine-generated.
    static ref GENERATED_BY_SCM: Regex =
        RegexBuilder::new(r"# file generated by setuptools_scm")
            .case_insensitive(true)
            .build()
            .unwrap();
}

/// Compile the header phrase into a case-insensitive matcher. The
/// phrase is a literal, not a user-supplied regex.
pub fn header_pattern(phrase: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(phrase))
        .case_insensitive(true)
        .build()
        .with_context(|| format!("Failed to compile header phrase '{}'", phrase))
}

/// Decide whether a file carries the required header within its first
/// `MAX_HEADER_LINES` lines. Stops reading at the first match.
pub fn classify(path: &Path, header: &Regex) -> Result<HeaderStatus> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    // Success flag set only on a match; bound-exceeded and
    // exhausted-without-match both fall through to Fail. This also
    // catches empty files (usually __init__.py).
    let mut found = false;
    for line in reader.lines().take(MAX_HEADER_LINES) {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if header.is_match(&line) {
            found = true;
            break;
        }
    }

    if found {
        Ok(HeaderStatus::Pass)
    } else {
        Ok(HeaderStatus::Fail)
    }
}

/// A file is exempt only if it is named `_version.py` exactly and its
/// first `MAX_HEADER_LINES` lines prove it was generated by build
/// tooling. A `_version.py` without the marker still needs a header.
pub fn is_exempt(path: &Path) -> Result<bool> {
    if path.file_name().map_or(true, |name| name != VERSION_FILE_NAME) {
        return Ok(false);
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    for line in reader.lines().take(MAX_HEADER_LINES) {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if GENERATED_BY_SCM.is_match(&line) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Walk the policy's top-level directories under `root` and check every
/// matching file. Fail-slow: the whole tree is scanned and every
/// offender collected before anything is reported. I/O errors abort the
/// scan; they are never counted as missing headers.
pub fn scan(root: &Path, policy: &HeaderPolicy, verbose: bool) -> Result<ScanReport> {
    let header = header_pattern(&policy.header_phrase)?;
    let mut report = ScanReport::default();

    for top_level_dir in &policy.top_level_dirs {
        for glob_pattern in &policy.glob_patterns {
            let pattern = root
                .join(top_level_dir)
                .join(glob_pattern)
                .to_string_lossy()
                .into_owned();
            // A directory with no matches (or that does not exist) is a
            // valid, empty result.
            let entries = glob::glob(&pattern)
                .with_context(|| format!("Invalid glob pattern '{}'", pattern))?;

            for entry in entries {
                let path = entry.context("Failed to read directory entry during scan")?;
                if verbose {
                    println!("{}", path.display());
                }
                if !is_exempt(&path)? && classify(&path, &header)? == HeaderStatus::Fail {
                    report.failing.push(path);
                }
                report.files_checked += 1;
            }
        }
    }

    Ok(report)
}
