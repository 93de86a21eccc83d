//! Controller for handing a completed artifact to the deployment service.

use chrono::Utc;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

use crate::api::Backend;
use crate::artifact::{Artifact, ArtifactOrigin};
use crate::registry::models::Platform;
use crate::ui::{NoticeKind, Notifier, UrlOpener};

/// Submits artifacts for deployment and surfaces the resulting endpoint.
///
/// Deployment is fire-and-forget: after submission, progress is observed
/// only through the deployment registry, never tracked here.
pub struct DeploymentController {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    opener: Arc<dyn UrlOpener>,
    last_url: Mutex<Option<String>>,
}

impl DeploymentController {
    pub fn new(
        backend: Arc<dyn Backend>,
        notifier: Arc<dyn Notifier>,
        opener: Arc<dyn UrlOpener>,
    ) -> Self {
        Self {
            backend,
            notifier,
            opener,
            last_url: Mutex::new(None),
        }
    }

    /// URL of the most recent successful deployment, if any.
    pub fn last_url(&self) -> Option<String> {
        self.last_url
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Deploy a completed artifact to `platform`.
    ///
    /// With no artifact this fails fast: one notification, no network
    /// call. On success the deployment URL is stored and opened in the
    /// browser; on failure a notification is raised and prior state is
    /// left untouched.
    ///
    /// The project name is the origin prefix plus the current Unix-millis
    /// timestamp — unique under normal clock monotonicity, not under
    /// clock skew.
    pub async fn deploy(
        &self,
        artifact: Option<&Artifact>,
        origin: ArtifactOrigin,
        platform: Platform,
    ) {
        let Some(artifact) = artifact else {
            self.notifier
                .notify("Generate a project before deploying", NoticeKind::Error);
            return;
        };

        let project_name = format!("{}-{}", origin.name_prefix(), Utc::now().timestamp_millis());
        debug!(%project_name, %platform, "submitting artifact for deployment");

        match self.backend.deploy(artifact, &project_name, platform).await {
            Ok(url) => {
                info!(%url, "deployment started");
                *self
                    .last_url
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = Some(url.clone());
                self.notifier.notify("Deployment started", NoticeKind::Success);
                self.opener.open_url(&url);
            }
            Err(err) => {
                self.notifier
                    .notify(&format!("Deployment failed: {}", err), NoticeKind::Error);
            }
        }
    }
}
