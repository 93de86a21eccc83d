use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use atelier::config::Config;

mod cmd;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(version, about = "AI web-app platform client")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the platform service. Overrides atelier.toml and the
    /// ATELIER_API_URL environment variable.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a project from a free-text description
    Generate {
        /// What to build, in plain language
        description: String,

        /// Target framework: react, vue, angular, svelte
        #[arg(short, long, default_value = "react")]
        framework: String,

        /// Deploy the generated project to this platform
        #[arg(long)]
        deploy: Option<String>,
    },
    /// Convert a Figma design file to code
    Convert {
        /// Figma share URL (https://www.figma.com/file/...)
        url: String,

        /// Target framework: react, vue, angular, svelte
        #[arg(short, long, default_value = "react")]
        framework: String,

        /// Deploy the converted project to this platform
        #[arg(long)]
        deploy: Option<String>,
    },
    /// List and manage persisted projects
    Projects {
        #[command(subcommand)]
        command: Option<ProjectsCommands>,
    },
    /// List and manage deployments
    Deployments {
        #[command(subcommand)]
        command: Option<DeploymentsCommands>,
    },
    /// List supported deployment platforms
    Platforms,
    /// View or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ProjectsCommands {
    /// List all projects
    List,
    /// Show one project in detail
    Show { id: String },
    /// Delete a project
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Clone)]
pub enum DeploymentsCommands {
    /// List all deployments
    List,
    /// Fetch the current status of a deployment
    Status {
        project_id: String,
        #[arg(long, default_value = "vercel")]
        platform: String,
    },
    /// Delete a deployment
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Initialize a default atelier.toml file
    Init,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let default_filter = if verbose { "atelier=debug" } else { "atelier=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let project_dir = match cli.project_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let config = Config::load(&project_dir, cli.api_url.as_deref())?;

    match &cli.command {
        Commands::Generate {
            description,
            framework,
            deploy,
        } => {
            cmd::cmd_generate(&config, description, framework, deploy.as_deref()).await?;
        }
        Commands::Convert {
            url,
            framework,
            deploy,
        } => {
            cmd::cmd_convert(&config, url, framework, deploy.as_deref()).await?;
        }
        Commands::Projects { command } => {
            cmd::cmd_projects(&config, command.clone()).await?;
        }
        Commands::Deployments { command } => {
            cmd::cmd_deployments(&config, command.clone()).await?;
        }
        Commands::Platforms => {
            cmd::cmd_platforms(&config).await?;
        }
        Commands::Config { command } => {
            cmd::cmd_config(&config, &project_dir, command.clone())?;
        }
    }

    Ok(())
}
