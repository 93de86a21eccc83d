//! Figma conversion command — `atelier convert`.

use anyhow::Result;
use std::sync::Arc;

use atelier::api::HttpBackend;
use atelier::artifact::ArtifactOrigin;
use atelier::config::Config;
use atelier::controller::{ConversionController, DeploymentController};
use atelier::registry::Platform;
use atelier::request::Framework;
use atelier::ui::{ConsoleNotifier, SystemOpener};

use super::{print_artifact, spinner};

pub async fn cmd_convert(
    config: &Config,
    url: &str,
    framework: &str,
    deploy: Option<&str>,
) -> Result<()> {
    let framework: Framework = framework.parse()?;
    let platform: Option<Platform> = deploy.map(str::parse).transpose()?;

    let backend = Arc::new(HttpBackend::new(&config.base_url, config.timeout())?);
    let notifier = Arc::new(ConsoleNotifier);
    let controller = ConversionController::new(backend.clone(), notifier.clone());

    let bar = spinner(&format!("Converting design to {}...", framework));
    controller.submit(url, framework).await;
    bar.finish_and_clear();

    let state = controller.state();
    let Some(artifact) = state.succeeded() else {
        return Ok(());
    };
    print_artifact(artifact);

    if let Some(platform) = platform {
        let deployer = DeploymentController::new(backend, notifier, Arc::new(SystemOpener));
        let bar = spinner(&format!("Deploying to {}...", platform));
        deployer
            .deploy(Some(artifact), ArtifactOrigin::Figma, platform)
            .await;
        bar.finish_and_clear();
        if let Some(url) = deployer.last_url() {
            println!("Deployment URL: {}", url);
        }
    }

    Ok(())
}
