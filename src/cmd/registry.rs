//! Registry commands — `atelier projects` and `atelier deployments`.
//!
//! Fetch failures are surfaced as notifications, mirroring the rest of the
//! client: the command succeeds with an error message rather than
//! propagating a process failure.

use anyhow::Result;
use console::style;
use std::sync::Arc;

use atelier::api::HttpBackend;
use atelier::config::Config;
use atelier::registry::{DeploymentRegistry, Platform, ProjectRegistry};
use atelier::ui::{
    AutoConfirm, ConfirmPrompt, ConsoleNotifier, InteractivePrompt, NoticeKind, Notifier,
};

use super::super::{DeploymentsCommands, ProjectsCommands};

fn confirm_port(force: bool) -> Arc<dyn ConfirmPrompt> {
    if force {
        Arc::new(AutoConfirm)
    } else {
        Arc::new(InteractivePrompt)
    }
}

pub async fn cmd_projects(config: &Config, command: Option<ProjectsCommands>) -> Result<()> {
    let backend = Arc::new(HttpBackend::new(&config.base_url, config.timeout())?);
    let notifier = Arc::new(ConsoleNotifier);

    match command {
        None | Some(ProjectsCommands::List) => {
            let registry =
                ProjectRegistry::new(backend, notifier.clone(), confirm_port(false));
            let projects = match registry.list().await {
                Ok(projects) => projects,
                Err(err) => {
                    notifier.notify(
                        &format!("Failed to load projects: {}", err),
                        NoticeKind::Error,
                    );
                    return Ok(());
                }
            };
            if projects.is_empty() {
                println!("No projects found.");
                return Ok(());
            }
            for project in &projects {
                println!(
                    "  {}  {} [{}] {} ({})",
                    style(&project.id).cyan(),
                    project.name,
                    project.framework,
                    project.status.as_str(),
                    project.created_at,
                );
            }
            println!();
            println!("{} project(s)", projects.len());
        }
        Some(ProjectsCommands::Show { id }) => {
            let registry =
                ProjectRegistry::new(backend, notifier.clone(), confirm_port(false));
            match registry.get(&id).await {
                Ok(project) => {
                    println!("{}", style(&project.name).bold());
                    println!("  id:         {}", project.id);
                    println!("  framework:  {}", project.framework);
                    println!("  status:     {}", project.status.as_str());
                    println!("  created:    {}", project.created_at);
                    println!("  {}", project.description);
                }
                Err(err) => {
                    notifier.notify(
                        &format!("Failed to load project: {}", err),
                        NoticeKind::Error,
                    );
                }
            }
        }
        Some(ProjectsCommands::Delete { id, force }) => {
            let registry = ProjectRegistry::new(backend, notifier, confirm_port(force));
            if let Some(fresh) = registry.remove(&id).await {
                println!("{} project(s) remaining", fresh.len());
            }
        }
    }

    Ok(())
}

pub async fn cmd_deployments(
    config: &Config,
    command: Option<DeploymentsCommands>,
) -> Result<()> {
    let backend = Arc::new(HttpBackend::new(&config.base_url, config.timeout())?);
    let notifier = Arc::new(ConsoleNotifier);

    match command {
        None | Some(DeploymentsCommands::List) => {
            let registry =
                DeploymentRegistry::new(backend, notifier.clone(), confirm_port(false));
            let deployments = match registry.list().await {
                Ok(deployments) => deployments,
                Err(err) => {
                    notifier.notify(
                        &format!("Failed to load deployments: {}", err),
                        NoticeKind::Error,
                    );
                    return Ok(());
                }
            };
            if deployments.is_empty() {
                println!("No deployments found.");
                return Ok(());
            }
            for deployment in &deployments {
                let url = deployment.url.as_deref().unwrap_or("-");
                println!(
                    "  {}  {} [{}] {} {} (updated {})",
                    style(&deployment.id).cyan(),
                    deployment.project_name,
                    deployment.platform,
                    deployment.status.as_str(),
                    url,
                    deployment.updated_at,
                );
            }
            println!();
            println!("{} deployment(s)", deployments.len());
        }
        Some(DeploymentsCommands::Status {
            project_id,
            platform,
        }) => {
            let platform: Platform = platform.parse()?;
            let registry =
                DeploymentRegistry::new(backend, notifier.clone(), confirm_port(false));
            match registry.status(&project_id, platform).await {
                Ok(report) => {
                    println!(
                        "{} on {}: {}",
                        report.project_id,
                        report.platform,
                        style(report.status.as_str()).bold(),
                    );
                    if let Some(updated) = &report.last_updated {
                        println!("last updated: {}", updated);
                    }
                }
                Err(err) => {
                    notifier.notify(
                        &format!("Failed to fetch deployment status: {}", err),
                        NoticeKind::Error,
                    );
                }
            }
        }
        Some(DeploymentsCommands::Delete { id, force }) => {
            let registry = DeploymentRegistry::new(backend, notifier, confirm_port(force));
            if let Some(fresh) = registry.remove(&id).await {
                println!("{} deployment(s) remaining", fresh.len());
            }
        }
    }

    Ok(())
}
