//! Read-through client for the server-owned project collection.

use std::sync::Arc;
use tracing::debug;

use crate::api::Backend;
use crate::errors::ApiError;
use crate::registry::models::Project;
use crate::ui::{ConfirmPrompt, NoticeKind, Notifier};

/// Lists and deletes persisted projects. The collection is owned by the
/// server; every mutation is followed by a fresh fetch instead of a local
/// edit, so the displayed set always matches server truth.
pub struct ProjectRegistry {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
}

impl ProjectRegistry {
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

    /// Fetch the current project list. Each call is a fresh fetch.
    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.backend.list_projects().await
    }

    /// Fetch a single project by id.
    pub async fn get(&self, id: &str) -> Result<Project, ApiError> {
        self.backend.get_project(id).await
    }

    /// Delete a project after explicit confirmation.
    ///
    /// Declining the prompt performs no call and raises no error. On
    /// success the list is re-fetched and returned; on failure (of the
    /// delete or the refetch) a notification is raised and `None` is
    /// returned, leaving whatever the caller last displayed unchanged.
    pub async fn remove(&self, id: &str) -> Option<Vec<Project>> {
        if !self
            .confirm
            .confirm(&format!("Delete project {}? This cannot be undone.", id))
        {
            debug!(%id, "project delete declined");
            return None;
        }

        if let Err(err) = self.backend.delete_project(id).await {
            self.notifier
                .notify(&format!("Failed to delete project: {}", err), NoticeKind::Error);
            return None;
        }
        self.notifier.notify("Project deleted", NoticeKind::Success);

        match self.list().await {
            Ok(fresh) => Some(fresh),
            Err(err) => {
                self.notifier.notify(
                    &format!("Failed to refresh project list: {}", err),
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
    use crate::api::test_support::{sample_project, StubBackend};
    use crate::ui::notify::test_support::RecordingNotifier;
    use crate::ui::ports::test_support::ScriptedPrompt;
    use std::sync::atomic::Ordering;

    fn registry(
        confirm: ScriptedPrompt,
    ) -> (Arc<StubBackend>, Arc<RecordingNotifier>, Arc<ScriptedPrompt>, ProjectRegistry) {
        let backend = Arc::new(StubBackend::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let confirm = Arc::new(confirm);
        let registry = ProjectRegistry::new(backend.clone(), notifier.clone(), confirm.clone());
        (backend, notifier, confirm, registry)
    }

    #[tokio::test]
    async fn list_reflects_server_state() {
        let (backend, _notifier, _confirm, registry) = registry(ScriptedPrompt::accepting());
        backend
            .projects
            .lock()
            .unwrap()
            .extend([sample_project("proj_1"), sample_project("proj_2")]);

        let projects = registry.list().await.unwrap();
        assert_eq!(projects.len(), 2);
    }

    #[tokio::test]
    async fn declined_confirmation_issues_no_delete() {
        let (backend, notifier, confirm, registry) = registry(ScriptedPrompt::declining());
        backend.projects.lock().unwrap().push(sample_project("proj_1"));

        let result = registry.remove("proj_1").await;

        assert!(result.is_none());
        assert_eq!(confirm.prompt_count(), 1);
        assert_eq!(backend.delete_project_calls.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.count(), 0);
        assert_eq!(registry.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn successful_remove_refetches_without_the_id() {
        let (backend, notifier, _confirm, registry) = registry(ScriptedPrompt::accepting());
        backend
            .projects
            .lock()
            .unwrap()
            .extend([sample_project("proj_1"), sample_project("proj_2")]);

        let fresh = registry.remove("proj_1").await.expect("expected fresh list");

        assert!(fresh.iter().all(|p| p.id != "proj_1"));
        assert_eq!(fresh.len(), 1);
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);

        // And a later independent list agrees.
        let listed = registry.list().await.unwrap();
        assert!(listed.iter().all(|p| p.id != "proj_1"));
    }

    #[tokio::test]
    async fn failed_delete_notifies_and_leaves_list_unchanged() {
        let (backend, notifier, _confirm, registry) = registry(ScriptedPrompt::accepting());
        backend.projects.lock().unwrap().push(sample_project("proj_1"));
        backend.fail_deletes.store(true, Ordering::SeqCst);

        let result = registry.remove("proj_1").await;

        assert!(result.is_none());
        assert_eq!(backend.delete_project_calls.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.kinds(), vec![NoticeKind::Error]);
        assert_eq!(registry.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_returns_single_project() {
        let (backend, _notifier, _confirm, registry) = registry(ScriptedPrompt::accepting());
        backend.projects.lock().unwrap().push(sample_project("proj_7"));

        let project = registry.get("proj_7").await.unwrap();
        assert_eq!(project.id, "proj_7");
        assert!(registry.get("missing").await.is_err());
    }
}
