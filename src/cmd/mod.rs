//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module      | Commands handled          |
//! |-------------|---------------------------|
//! | `generate`  | `Generate`                |
//! | `convert`   | `Convert`                 |
//! | `registry`  | `Projects`, `Deployments` |
//! | `platforms` | `Platforms`               |
//! | `config`    | `Config`                  |

pub mod config;
pub mod convert;
pub mod generate;
pub mod platforms;
pub mod registry;

pub use config::cmd_config;
pub use convert::cmd_convert;
pub use generate::cmd_generate;
pub use platforms::cmd_platforms;
pub use registry::{cmd_deployments, cmd_projects};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use atelier::artifact::Artifact;

/// Spinner shown while a request is in flight.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("progress bar template is a valid static string"),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Print a generated artifact: every source file in order, then whichever
/// metadata carrier is present.
pub(crate) fn print_artifact(artifact: &Artifact) {
    println!();
    print_file("main file", &artifact.main_file);
    for component in &artifact.components {
        print_file(&component.name, &component.code);
    }
    if let Some((key, value)) = artifact.metadata() {
        match serde_json::to_string_pretty(value) {
            Ok(pretty) => print_file(key, &pretty),
            Err(_) => print_file(key, &value.to_string()),
        }
    }
    println!(
        "{}",
        style(format!("{} file(s) generated", artifact.file_count())).dim()
    );
}

fn print_file(name: &str, content: &str) {
    println!("{}", style(format!("── {} ──", name)).bold());
    println!("{}", content);
    println!();
}
