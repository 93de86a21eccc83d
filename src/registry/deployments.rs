//! Read-through client for the server-owned deployment collection.

use std::sync::Arc;
use tracing::debug;

use crate::api::Backend;
use crate::errors::ApiError;
use crate::registry::models::{Deployment, DeploymentStatusReport, Platform};
use crate::ui::{ConfirmPrompt, NoticeKind, Notifier};

/// Lists, reads, and deletes persisted deployments with the same
/// refetch-after-mutation discipline as the project registry. Status is
/// only ever fetched; the client never advances it locally.
pub struct DeploymentRegistry {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
}

impl DeploymentRegistry {
    pub fn new(
        backend: Arc<dyn Backend>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            backend,
            notifier,
            confirm,
        }
    }

    /// Fetch the current deployment list. Each call is a fresh fetch.
    pub async fn list(&self) -> Result<Vec<Deployment>, ApiError> {
        self.backend.list_deployments().await
    }

    /// Fetch the current status of one deployment from its platform.
    pub async fn status(
        &self,
        project_id: &str,
        platform: Platform,
    ) -> Result<DeploymentStatusReport, ApiError> {
        self.backend.deployment_status(project_id, platform).await
    }

    /// Delete a deployment after explicit confirmation; semantics mirror
    /// [`crate::registry::ProjectRegistry::remove`].
    pub async fn remove(&self, id: &str) -> Option<Vec<Deployment>> {
        if !self
            .confirm
            .confirm(&format!("Delete deployment {}? This cannot be undone.", id))
        {
            debug!(%id, "deployment delete declined");
            return None;
        }

        if let Err(err) = self.backend.delete_deployment(id).await {
            self.notifier.notify(
                &format!("Failed to delete deployment: {}", err),
                NoticeKind::Error,
            );
            return None;
        }
        self.notifier
            .notify("Deployment deleted", NoticeKind::Success);

        match self.list().await {
            Ok(fresh) => Some(fresh),
            Err(err) => {
                self.notifier.notify(
                    &format!("Failed to refresh deployment list: {}", err),
                    NoticeKind::Error,
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{sample_deployment, StubBackend};
    use crate::registry::models::DeploymentStatus;
    use crate::ui::notify::test_support::RecordingNotifier;
    use crate::ui::ports::test_support::ScriptedPrompt;
    use std::sync::atomic::Ordering;

    fn registry(
        confirm: ScriptedPrompt,
    ) -> (Arc<StubBackend>, Arc<RecordingNotifier>, DeploymentRegistry) {
        let backend = Arc::new(StubBackend::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let registry =
            DeploymentRegistry::new(backend.clone(), notifier.clone(), Arc::new(confirm));
        (backend, notifier, registry)
    }

    #[tokio::test]
    async fn successful_remove_refetches_without_the_id() {
        let (backend, notifier, registry) = registry(ScriptedPrompt::accepting());
        backend
            .deployments
            .lock()
            .unwrap()
            .extend([sample_deployment("1"), sample_deployment("2")]);

        let fresh = registry.remove("1").await.expect("expected fresh list");

        assert!(fresh.iter().all(|d| d.id != "1"));
        assert_eq!(fresh.len(), 1);
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
    }

    #[tokio::test]
    async fn declined_confirmation_issues_no_delete() {
        let (backend, notifier, registry) = registry(ScriptedPrompt::declining());
        backend.deployments.lock().unwrap().push(sample_deployment("1"));

        assert!(registry.remove("1").await.is_none());
        assert_eq!(backend.delete_deployment_calls.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn failed_delete_notifies_without_retry() {
        let (backend, notifier, registry) = registry(ScriptedPrompt::accepting());
        backend.deployments.lock().unwrap().push(sample_deployment("1"));
        backend.fail_deletes.store(true, Ordering::SeqCst);

        assert!(registry.remove("1").await.is_none());
        assert_eq!(backend.delete_deployment_calls.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.kinds(), vec![NoticeKind::Error]);
        assert_eq!(registry.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn status_is_a_read_through() {
        let (_backend, _notifier, registry) = registry(ScriptedPrompt::accepting());

        let report = registry.status("p1", Platform::Vercel).await.unwrap();
        assert_eq!(report.project_id, "p1");
        assert_eq!(report.status, DeploymentStatus::Deployed);
    }
}
