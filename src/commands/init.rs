use anyhow::Result;
use py_header_auditor::init;

pub fn handle_init() -> Result<()> {
    init::generate_config()
}
