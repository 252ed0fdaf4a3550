pub mod config;
pub mod header;
pub mod init;
pub mod output;
pub mod project;

// Re-export main types for easy access
pub use header::{HeaderPolicy, HeaderStatus, ScanReport};
pub use project::find_project_root;
