//! Registry clients for server-owned collections.
//!
//! Projects and deployments are persisted behind the REST boundary; the
//! clients here are read-through with refetch-after-mutation consistency
//! and confirmation-gated deletes.

pub mod deployments;
pub mod models;
pub mod projects;

pub use deployments::DeploymentRegistry;
pub use models::{
    Deployment, DeploymentStatus, DeploymentStatusReport, Platform, PlatformInfo, Project,
    ProjectStatus,
};
pub use projects::ProjectRegistry;
