//! Server-owned registry records: persisted projects and deployments.
//!
//! These are read-through snapshots of backend state. Timestamps stay as
//! the ISO strings the service sends; the client never rewrites them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deployment target platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[default]
    Vercel,
    GithubPages,
    Netlify,
    /// A platform this client version does not know; kept so new server
    /// values never break list rendering.
    #[serde(other)]
    Other,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vercel => "vercel",
            Self::GithubPages => "github-pages",
            Self::Netlify => "netlify",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vercel" => Ok(Self::Vercel),
            "github-pages" => Ok(Self::GithubPages),
            "netlify" => Ok(Self::Netlify),
            _ => anyhow::bail!(
                "Invalid platform '{}'. Valid values: vercel, github-pages, netlify",
                s
            ),
        }
    }
}

/// Deployment lifecycle status as reported by the server. The client only
/// reflects what the server says; it never advances or regresses a status
/// locally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Pending,
    Building,
    Deployed,
    Failed,
}

impl DeploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Building => "building",
            Self::Deployed => "deployed",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Deployed | Self::Failed)
    }
}

/// A persisted deployment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub project_name: String,
    pub platform: Platform,
    pub status: DeploymentStatus,
    #[serde(default)]
    pub url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Project lifecycle status as reported by the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Created,
    Deployed,
    #[serde(other)]
    Other,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Deployed => "deployed",
            Self::Other => "other",
        }
    }
}

/// A persisted project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub framework: String,
    pub status: ProjectStatus,
    pub created_at: String,
}

/// Point-in-time status read for one deployment, fetched on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentStatusReport {
    pub project_id: String,
    pub platform: Platform,
    pub status: DeploymentStatus,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Catalog entry for a supported deployment platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}
