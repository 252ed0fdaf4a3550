use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod checker;

// Re-export from checker
pub use checker::{classify, is_exempt, scan};

/// Line bound for both the header check and the generated-file check.
/// The upstream Python check aborted one line late (`lines_read > 10`);
/// the bound here is a strict 10.
pub const MAX_HEADER_LINES: usize = 10;

/// The one filename eligible for the generated-file exemption.
pub const VERSION_FILE_NAME: &str = "_version.py";

/// Default legal-notice phrase required near the top of every file.
pub const DEFAULT_HEADER_PHRASE: &str =
    "Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.";

/// Result of classifying a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    Pass,
    Fail,
}

/// Scan parameters: which subtrees to walk, which files to include,
/// and which phrase they must carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderPolicy {
    pub header_phrase: String,
    pub top_level_dirs: Vec<String>,
    pub glob_patterns: Vec<String>,
}

impl Default for HeaderPolicy {
    fn default() -> Self {
        Self {
            header_phrase: DEFAULT_HEADER_PHRASE.to_string(),
            // Only a few top level directories, so a developer's virtual
            // env never gets snagged, at the risk of missing stray
            // top-level files.
            top_level_dirs: vec![
                "src".to_string(),
                "test".to_string(),
                "scripts".to_string(),
            ],
            glob_patterns: vec!["**/*.py".to_string(), "**/*.sh".to_string()],
        }
    }
}

/// Outcome of one full scan: how many files were examined and which of
/// them lack a valid header, in discovery order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanReport {
    pub files_checked: usize,
    pub failing: Vec<PathBuf>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.failing.is_empty()
    }

    /// Failing paths as plain strings, for the JSON list in the failure
    /// message.
    pub fn failing_paths(&self) -> Vec<String> {
        self.failing
            .iter()
            .map(|p| p.display().to_string())
            .collect()
    }
}
