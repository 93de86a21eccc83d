//! Configuration commands — `atelier config`.

use anyhow::Result;
use console::style;
use std::path::Path;

use atelier::config::Config;

use super::super::ConfigCommands;

pub fn cmd_config(
    config: &Config,
    project_dir: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Configuration");
            println!("=============");
            println!("  base_url:     {}", config.base_url);
            println!("  timeout_secs: {}", config.timeout_secs);
            if config.config_path.exists() {
                println!("  file:         {}", config.config_path.display());
            } else {
                println!(
                    "  file:         {} {}",
                    config.config_path.display(),
                    style("(not present, defaults in effect)").dim()
                );
            }
            println!();
            println!("Overrides: ATELIER_API_URL, ATELIER_TIMEOUT_SECS, --api-url");
        }
        Some(ConfigCommands::Init) => {
            let path = Config::write_default(project_dir)?;
            println!("Initialized configuration at {}", path.display());
        }
    }
    Ok(())
}
