//! Request builders — validated payloads for the generation endpoints.
//!
//! Builders are pure functions over strings: validation happens here, and
//! a request that fails to build never reaches the network layer.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::errors::ValidationError;

static FIGMA_FILE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"figma\.com/file/([A-Za-z0-9]+)").unwrap());

/// Target framework for generated code. Every request carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    React,
    Vue,
    Angular,
    Svelte,
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Framework::React => write!(f, "react"),
            Framework::Vue => write!(f, "vue"),
            Framework::Angular => write!(f, "angular"),
            Framework::Svelte => write!(f, "svelte"),
        }
    }
}

impl std::str::FromStr for Framework {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "react" => Ok(Framework::React),
            "vue" => Ok(Framework::Vue),
            "angular" => Ok(Framework::Angular),
            "svelte" => Ok(Framework::Svelte),
            _ => anyhow::bail!(
                "Invalid framework '{}'. Valid values: react, vue, angular, svelte",
                s
            ),
        }
    }
}

/// A validated "description → code" request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub description: String,
    pub framework: Framework,
}

impl GenerationRequest {
    /// Build a request from raw input. Fails on empty or whitespace-only
    /// descriptions.
    pub fn build(description: &str, framework: Framework) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Self {
            description: description.to_string(),
            framework,
        })
    }
}

/// A validated "design file → code" request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub file_key: String,
    pub framework: Framework,
    pub include_images: bool,
}

impl ConversionRequest {
    /// Build a request from a Figma share URL. Image export is always
    /// requested; the backend decides whether any images exist.
    pub fn build(url: &str, framework: Framework) -> Result<Self, ValidationError> {
        let file_key = extract_figma_file_key(url)?;
        Ok(Self {
            file_key: file_key.to_string(),
            framework,
            include_images: true,
        })
    }
}

/// Extract the alphanumeric file key from a Figma share URL.
///
/// Accepts any URL containing a `figma.com/file/<key>` segment:
/// - `https://www.figma.com/file/abc123/My-Design`
/// - `https://figma.com/file/abc123`
///
/// Empty and non-matching inputs fail with distinct errors so the user
/// is told whether the field was blank or the URL was wrong.
pub fn extract_figma_file_key(url: &str) -> Result<&str, ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    FIGMA_FILE_KEY
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|key| key.as_str())
        .ok_or_else(|| ValidationError::MalformedFigmaUrl {
            url: url.to_string(),
        })
}
