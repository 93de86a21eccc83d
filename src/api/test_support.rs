//! Scriptable in-memory [`Backend`] double for controller and registry
//! tests.
//!
//! Responses are scripted per endpoint; an optional gate parks a call until
//! the test releases it, which is how response-ordering races are staged.
//! Registry collections live in plain vectors that deletes mutate, so a
//! refetch after a delete observes "server" truth.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use super::Backend;
use crate::artifact::{Artifact, Component};
use crate::errors::ApiError;
use crate::registry::models::{
    Deployment, DeploymentStatus, DeploymentStatusReport, Platform, PlatformInfo, Project,
    ProjectStatus,
};
use crate::request::{ConversionRequest, GenerationRequest};

pub fn sample_artifact(tag: &str) -> Artifact {
    Artifact {
        main_file: format!("// {}", tag),
        components: vec![Component {
            name: "App".to_string(),
            code: "export default {}".to_string(),
        }],
        package_json: None,
        design_tokens: None,
    }
}

pub fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        description: "generated".to_string(),
        framework: "react".to_string(),
        status: ProjectStatus::Created,
        created_at: "2024-01-15T10:30:00Z".to_string(),
    }
}

pub fn sample_deployment(id: &str) -> Deployment {
    Deployment {
        id: id.to_string(),
        project_name: format!("project-{}", id),
        platform: Platform::Vercel,
        status: DeploymentStatus::Deployed,
        url: Some(format!("https://{}.vercel.app", id)),
        created_at: "2024-01-15T10:30:00Z".to_string(),
        updated_at: "2024-01-15T10:35:00Z".to_string(),
    }
}

/// One scripted generation/conversion response.
pub struct Script {
    /// Park the call until the test fires this gate.
    pub gate: Option<Arc<Notify>>,
    pub result: Result<Artifact, String>,
}

impl Script {
    pub fn ready(result: Result<Artifact, String>) -> Self {
        Self { gate: None, result }
    }

    pub fn gated(gate: Arc<Notify>, result: Result<Artifact, String>) -> Self {
        Self {
            gate: Some(gate),
            result,
        }
    }
}

#[derive(Default)]
pub struct StubBackend {
    pub generate_calls: AtomicUsize,
    pub convert_calls: AtomicUsize,
    pub deploy_calls: AtomicUsize,
    pub delete_project_calls: AtomicUsize,
    pub delete_deployment_calls: AtomicUsize,

    pub generate_scripts: Mutex<VecDeque<Script>>,
    pub convert_scripts: Mutex<VecDeque<Script>>,
    /// Deploy outcome: Ok(url) or Err(service message).
    pub deploy_result: Mutex<Option<Result<String, String>>>,
    /// Recorded (project_name, platform) pairs from deploy calls.
    pub deployed: Mutex<Vec<(String, Platform)>>,

    pub projects: Mutex<Vec<Project>>,
    pub deployments: Mutex<Vec<Deployment>>,
    pub fail_deletes: AtomicBool,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_generate(&self, script: Script) {
        self.generate_scripts.lock().unwrap().push_back(script);
    }

    pub fn script_convert(&self, script: Script) {
        self.convert_scripts.lock().unwrap().push_back(script);
    }

    async fn run_script(
        scripts: &Mutex<VecDeque<Script>>,
        fallback_tag: &str,
    ) -> Result<Artifact, ApiError> {
        let script = scripts.lock().unwrap().pop_front();
        match script {
            Some(Script { gate, result }) => {
                if let Some(gate) = gate {
                    gate.notified().await;
                }
                result.map_err(ApiError::Service)
            }
            None => Ok(sample_artifact(fallback_tag)),
        }
    }
}

#[async_trait]
impl Backend for StubBackend {
    async fn generate(&self, _request: &GenerationRequest) -> Result<Artifact, ApiError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        Self::run_script(&self.generate_scripts, "generated").await
    }

    async fn convert(&self, _request: &ConversionRequest) -> Result<Artifact, ApiError> {
        self.convert_calls.fetch_add(1, Ordering::SeqCst);
        Self::run_script(&self.convert_scripts, "converted").await
    }

    async fn deploy(
        &self,
        _artifact: &Artifact,
        project_name: &str,
        platform: Platform,
    ) -> Result<String, ApiError> {
        self.deploy_calls.fetch_add(1, Ordering::SeqCst);
        self.deployed
            .lock()
            .unwrap()
            .push((project_name.to_string(), platform));
        let result = self.deploy_result.lock().unwrap().clone();
        match result {
            Some(Ok(url)) => Ok(url),
            Some(Err(message)) => Err(ApiError::Service(message)),
            None => Ok("https://stub.vercel.app".to_string()),
        }
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Service("Project not found".to_string()))
    }

    async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        self.delete_project_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(ApiError::Service("delete rejected".to_string()));
        }
        self.projects.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn list_deployments(&self) -> Result<Vec<Deployment>, ApiError> {
        Ok(self.deployments.lock().unwrap().clone())
    }

    async fn delete_deployment(&self, id: &str) -> Result<(), ApiError> {
        self.delete_deployment_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(ApiError::Service("delete rejected".to_string()));
        }
        self.deployments.lock().unwrap().retain(|d| d.id != id);
        Ok(())
    }

    async fn deployment_status(
        &self,
        project_id: &str,
        platform: Platform,
    ) -> Result<DeploymentStatusReport, ApiError> {
        Ok(DeploymentStatusReport {
            project_id: project_id.to_string(),
            platform,
            status: DeploymentStatus::Deployed,
            last_updated: Some("2024-01-01T00:00:00Z".to_string()),
        })
    }

    async fn platforms(&self) -> Result<Vec<PlatformInfo>, ApiError> {
        Ok(vec![PlatformInfo {
            id: "vercel".to_string(),
            name: "Vercel".to_string(),
            description: "Modern frontend deployment platform".to_string(),
            features: vec!["automatic deployments".to_string()],
        }])
    }
}
