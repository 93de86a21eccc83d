//! Backend REST surface.
//!
//! [`Backend`] is the seam between the orchestration layer and the wire:
//! controllers and registry clients hold an `Arc<dyn Backend>`, the real
//! implementation is the reqwest-based [`HttpBackend`], and tests substitute
//! recording stubs.

pub mod client;
#[cfg(test)]
pub mod test_support;

use async_trait::async_trait;

use crate::artifact::Artifact;
use crate::errors::ApiError;
use crate::registry::models::{
    Deployment, DeploymentStatusReport, Platform, PlatformInfo, Project,
};
use crate::request::{ConversionRequest, GenerationRequest};

pub use client::HttpBackend;

/// Abstraction over the platform REST API for testability.
/// Real implementation: `HttpBackend`. Test doubles live with the tests.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `POST /api/v1/code/generate` — description to artifact.
    async fn generate(&self, request: &GenerationRequest) -> Result<Artifact, ApiError>;

    /// `POST /api/v1/figma/to-code` — design file to artifact.
    async fn convert(&self, request: &ConversionRequest) -> Result<Artifact, ApiError>;

    /// `POST /api/v1/deploy/deploy` — submit an artifact, returning the
    /// deployment URL.
    async fn deploy(
        &self,
        artifact: &Artifact,
        project_name: &str,
        platform: Platform,
    ) -> Result<String, ApiError>;

    /// `GET /api/v1/projects/`
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

    /// `GET /api/v1/projects/{id}`
    async fn get_project(&self, id: &str) -> Result<Project, ApiError>;

    /// `DELETE /api/v1/projects/{id}`
    async fn delete_project(&self, id: &str) -> Result<(), ApiError>;

    /// `GET /api/v1/deploy/`
    async fn list_deployments(&self) -> Result<Vec<Deployment>, ApiError>;

    /// `DELETE /api/v1/deploy/{id}`
    async fn delete_deployment(&self, id: &str) -> Result<(), ApiError>;

    /// `GET /api/v1/deploy/status/{project_id}`
    async fn deployment_status(
        &self,
        project_id: &str,
        platform: Platform,
    ) -> Result<DeploymentStatusReport, ApiError>;

    /// `GET /api/v1/deploy/platforms`
    async fn platforms(&self) -> Result<Vec<PlatformInfo>, ApiError>;
}
