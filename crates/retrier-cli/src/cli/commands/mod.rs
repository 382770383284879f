//! CLI command handlers.

mod config;
mod exec;

pub use config::run_config;
pub use exec::run_exec;
