//! Controller for "design file → artifact" requests.
//!
//! Structurally a twin of the generation controller; only the validator
//! and the endpoint differ.

use std::sync::Arc;
use tracing::debug;

use crate::api::Backend;
use crate::artifact::Artifact;
use crate::controller::state::{RequestState, SingleFlight};
use crate::request::{ConversionRequest, Framework};
use crate::ui::{NoticeKind, Notifier};

/// Owns the asynchronous lifecycle of one design-conversion request at a
/// time, with the same single-flight guarantee as generation.
pub struct ConversionController {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    flight: SingleFlight<Artifact>,
}

impl ConversionController {
    pub fn new(backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            flight: SingleFlight::new(),
        }
    }

    pub fn state(&self) -> RequestState<Artifact> {
        self.flight.snapshot()
    }

    pub fn reset(&self) {
        self.flight.reset();
    }

    /// Validate the Figma URL and, when valid, issue exactly one network
    /// call. Empty and malformed URLs surface distinct notifications and
    /// never reach the network.
    pub async fn submit(&self, url: &str, framework: Framework) {
        let request = match ConversionRequest::build(url, framework) {
            Ok(request) => request,
            Err(err) => {
                self.notifier.notify(&err.to_string(), NoticeKind::Error);
                return;
            }
        };

        let ticket = self.flight.begin();
        debug!(ticket, file_key = %request.file_key, "conversion request in flight");

        match self.backend.convert(&request).await {
            Ok(artifact) => {
                if self.flight.finish(ticket, RequestState::Succeeded(artifact)) {
                    self.notifier
                        .notify("Design converted successfully", NoticeKind::Success);
                } else {
                    debug!(ticket, "discarding superseded conversion response");
                }
            }
            Err(err) => {
                let reason = err.to_string();
                if self
                    .flight
                    .finish(ticket, RequestState::Failed(reason.clone()))
                {
                    self.notifier
                        .notify(&format!("Design conversion failed: {}", reason), NoticeKind::Error);
                } else {
                    debug!(ticket, "discarding superseded conversion failure");
                }
            }
        }
    }
}
