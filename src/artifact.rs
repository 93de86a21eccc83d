//! The generated-project artifact model.
//!
//! An [`Artifact`] is the normalized output of both generation pipelines:
//! a main source file, an ordered list of named components, and auxiliary
//! metadata. Description-driven generation ships a `package_json` manifest;
//! design-driven conversion ships a `design_tokens` set. The wire format
//! carries whichever applies, so both keys are modeled as optional carriers.

use serde::{Deserialize, Serialize};

/// A single named component of a generated project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub code: String,
}

/// A complete generated project, immutable once produced.
///
/// A fresh request always yields a fresh `Artifact`; nothing patches an
/// existing one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Primary source text (the application entry file).
    pub main_file: String,
    /// Sub-components in insertion order; insertion order is display order.
    #[serde(default)]
    pub components: Vec<Component>,
    /// Package manifest, present for description-driven generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_json: Option<serde_json::Value>,
    /// Design-token set, present for design-driven conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_tokens: Option<serde_json::Value>,
}

impl Artifact {
    /// Auxiliary metadata under its wire name, or `None` when the artifact
    /// carries neither variant (absent metadata is treated as empty).
    pub fn metadata(&self) -> Option<(&'static str, &serde_json::Value)> {
        if let Some(manifest) = &self.package_json {
            Some(("package_json", manifest))
        } else {
            self.design_tokens.as_ref().map(|tokens| ("design_tokens", tokens))
        }
    }

    /// Total number of source files (main file plus components).
    pub fn file_count(&self) -> usize {
        1 + self.components.len()
    }
}

/// Which pipeline produced an artifact.
///
/// The origin decides the deployment project-name prefix; it is carried
/// alongside the artifact rather than inferred from metadata keys because
/// a generation response may omit `package_json` entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactOrigin {
    /// Generated from a free-text description.
    Description,
    /// Converted from a Figma design file.
    Figma,
}

impl ArtifactOrigin {
    /// Prefix for deterministic deployment project names.
    pub fn name_prefix(&self) -> &'static str {
        match self {
            ArtifactOrigin::Description => "project",
            ArtifactOrigin::Figma => "figma-project",
        }
    }
}
