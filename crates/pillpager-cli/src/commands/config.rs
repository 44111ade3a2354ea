use std::path::Path;

use anyhow::{bail, Result};

use pillpager_core::AppConfig;

/// Print the resolved configuration and where it was loaded from
pub fn show(config: &AppConfig, path: &Path) -> Result<()> {
    let source = if path.exists() { "file" } else { "defaults" };
    println!("# {} ({})", path.display(), source);
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Write the default configuration to `path`
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}.\nUse --force to overwrite it.",
            path.display()
        );
    }
    AppConfig::default().save_to(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
