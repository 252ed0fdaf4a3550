pub mod check;
pub mod config;
pub mod init;

pub use check::handle_check;
pub use config::handle_config;
pub use init::handle_init;
