//! `dsr config` – show where configuration comes from and what it says.

use anyhow::Result;
use dsr_core::config::{self, DsrConfig};
use std::path::Path;

pub fn run_show_config(explicit: Option<&Path>, cfg: &DsrConfig) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
