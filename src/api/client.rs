//! reqwest implementation of the [`Backend`] port.
//!
//! All calls share one connection pool with a bounded request timeout.
//! Error classification: failures before a response arrives are
//! `Transport`, HTTP error statuses and `success: false` payloads are
//! `Service` (the backend reports failures as HTTP 400 with a `detail`
//! string), and body-shape mismatches are `Decode`.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::Backend;
use crate::artifact::Artifact;
use crate::errors::ApiError;
use crate::registry::models::{
    Deployment, DeploymentStatusReport, Platform, PlatformInfo, Project,
};
use crate::request::{ConversionRequest, GenerationRequest};

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client against `base_url` with a hard per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// ── Wire envelopes ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ErrorEnvelope {
    detail: Option<String>,
}

#[derive(Deserialize)]
struct CodeEnvelope {
    success: bool,
    code: Option<Artifact>,
    /// The conversion endpoint also returns design tokens beside the
    /// artifact; folded into the artifact when it lacks its own.
    #[serde(default)]
    design_tokens: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct DeployEnvelope {
    success: bool,
    deployment_url: Option<String>,
}

#[derive(Deserialize)]
struct ProjectsEnvelope {
    success: bool,
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct ProjectEnvelope {
    success: bool,
    project: Option<Project>,
}

#[derive(Deserialize)]
struct DeploymentsEnvelope {
    success: bool,
    #[serde(default)]
    deployments: Vec<Deployment>,
}

#[derive(Deserialize)]
struct StatusEnvelope {
    success: bool,
    #[serde(flatten)]
    report: DeploymentStatusReport,
}

#[derive(Deserialize)]
struct PlatformsEnvelope {
    success: bool,
    #[serde(default)]
    platforms: Vec<PlatformInfo>,
}

#[derive(Deserialize)]
struct AckEnvelope {
    success: bool,
}

/// Classify the HTTP status, then decode the body.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let detail = resp
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(ApiError::Service(detail));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn service_failure() -> ApiError {
    ApiError::Service("The service reported failure".to_string())
}

#[async_trait]
impl Backend for HttpBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<Artifact, ApiError> {
        debug!(framework = %request.framework, "requesting code generation");
        let resp = self
            .http
            .post(self.url("/api/v1/code/generate"))
            .json(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: CodeEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        envelope
            .code
            .ok_or_else(|| ApiError::Decode("response missing code payload".to_string()))
    }

    async fn convert(&self, request: &ConversionRequest) -> Result<Artifact, ApiError> {
        debug!(file_key = %request.file_key, "requesting design conversion");
        let resp = self
            .http
            .post(self.url("/api/v1/figma/to-code"))
            .json(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: CodeEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        let mut artifact = envelope
            .code
            .ok_or_else(|| ApiError::Decode("response missing code payload".to_string()))?;
        if artifact.design_tokens.is_none() {
            artifact.design_tokens = envelope.design_tokens;
        }
        Ok(artifact)
    }

    async fn deploy(
        &self,
        artifact: &Artifact,
        project_name: &str,
        platform: Platform,
    ) -> Result<String, ApiError> {
        debug!(%project_name, %platform, "submitting deployment");
        let body = serde_json::json!({
            "project_data": artifact,
            "project_name": project_name,
            "platform": platform,
        });
        let resp = self
            .http
            .post(self.url("/api/v1/deploy/deploy"))
            .json(&body)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: DeployEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        envelope
            .deployment_url
            .ok_or_else(|| ApiError::Decode("response missing deployment_url".to_string()))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/v1/projects/"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: ProjectsEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        Ok(envelope.projects)
    }

    async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/v1/projects/{}", id)))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: ProjectEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        envelope
            .project
            .ok_or_else(|| ApiError::Decode("response missing project".to_string()))
    }

    async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/v1/projects/{}", id)))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: AckEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        Ok(())
    }

    async fn list_deployments(&self) -> Result<Vec<Deployment>, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/v1/deploy/"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: DeploymentsEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        Ok(envelope.deployments)
    }

    async fn delete_deployment(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/v1/deploy/{}", id)))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: AckEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        Ok(())
    }

    async fn deployment_status(
        &self,
        project_id: &str,
        platform: Platform,
    ) -> Result<DeploymentStatusReport, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/v1/deploy/status/{}", project_id)))
            .query(&[("platform", platform.as_str())])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: StatusEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        Ok(envelope.report)
    }

    async fn platforms(&self) -> Result<Vec<PlatformInfo>, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/v1/deploy/platforms"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: PlatformsEnvelope = read_json(resp).await?;
        if !envelope.success {
            return Err(service_failure());
        }
        Ok(envelope.platforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::models::DeploymentStatus;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let backend = HttpBackend::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            backend.url("/api/v1/projects/"),
            "http://localhost:8000/api/v1/projects/"
        );
    }

    #[test]
    fn code_envelope_accepts_sibling_design_tokens() {
        let json = r#"{
            "success": true,
            "code": {"main_file": "x", "components": []},
            "design_tokens": {"colors": {}}
        }"#;
        let envelope: CodeEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.design_tokens.is_some());
        assert!(envelope.code.unwrap().design_tokens.is_none());
    }

    #[test]
    fn status_envelope_flattens_report() {
        let json = r#"{
            "success": true,
            "project_id": "p1",
            "platform": "vercel",
            "status": "deployed",
            "last_updated": "2024-01-01T00:00:00Z"
        }"#;
        let envelope: StatusEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.report.project_id, "p1");
        assert_eq!(envelope.report.status, DeploymentStatus::Deployed);
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Nothing listens on port 1; the connection is refused before any
        // response exists, which must classify as Transport.
        let backend = HttpBackend::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let err = backend.list_projects().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "got {:?}", err);
    }
}
