//! Platform catalog command — `atelier platforms`.

use anyhow::Result;
use console::style;

use atelier::api::{Backend, HttpBackend};
use atelier::config::Config;
use atelier::ui::{ConsoleNotifier, NoticeKind, Notifier};

pub async fn cmd_platforms(config: &Config) -> Result<()> {
    let backend = HttpBackend::new(&config.base_url, config.timeout())?;
    let platforms = match backend.platforms().await {
        Ok(platforms) => platforms,
        Err(err) => {
            ConsoleNotifier.notify(
                &format!("Failed to load platform catalog: {}", err),
                NoticeKind::Error,
            );
            return Ok(());
        }
    };

    if platforms.is_empty() {
        println!("The service reports no deployment platforms.");
        return Ok(());
    }

    println!();
    println!("Supported deployment platforms");
    println!("==============================");
    for platform in &platforms {
        println!();
        println!("  {} ({})", style(&platform.name).bold(), platform.id);
        println!("  {}", platform.description);
        if !platform.features.is_empty() {
            println!("  features: {}", platform.features.join(", "));
        }
    }
    println!();

    Ok(())
}
