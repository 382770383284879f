//! `retrier config` – show where settings live and what they resolve to.

use anyhow::Result;
use retrier_core::config;

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init()?;
    println!("config: {}", path.display());
    println!("max_retries = {}", cfg.max_retries);
    Ok(())
}
