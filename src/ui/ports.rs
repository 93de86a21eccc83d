//! Browser and confirmation effect ports.

use dialoguer::Confirm;
use tracing::warn;

/// Opens a URL in the user's browser.
pub trait UrlOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

/// Default opener backed by the system handler. Failure to spawn a browser
/// is not fatal; the URL has already been shown to the user.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open_url(&self, url: &str) {
        if let Err(e) = open::that(url) {
            warn!(%url, "failed to open browser: {}", e);
            eprintln!("Failed to open browser: {}", e);
        }
    }
}

/// Asks the user to confirm a destructive operation.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive terminal prompt, defaulting to "no".
pub struct InteractivePrompt;

impl ConfirmPrompt for InteractivePrompt {
    fn confirm(&self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Non-interactive confirmation for `--force` runs: always yes.
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
