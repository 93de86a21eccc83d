//! Controller for "description → artifact" requests.

use std::sync::Arc;
use tracing::debug;

use crate::api::Backend;
use crate::artifact::Artifact;
use crate::controller::state::{RequestState, SingleFlight};
use crate::request::{Framework, GenerationRequest};
use crate::ui::{NoticeKind, Notifier};

/// Owns the asynchronous lifecycle of one description-driven generation
/// request at a time. Submissions are single-flight: a newer `submit`
/// supersedes a pending one and only the newest result lands in state.
pub struct GenerationController {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    flight: SingleFlight<Artifact>,
}

impl GenerationController {
    pub fn new(backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            flight: SingleFlight::new(),
        }
    }

    /// Current request state.
    pub fn state(&self) -> RequestState<Artifact> {
        self.flight.snapshot()
    }

    /// Discard any terminal state and return to `Idle`. A response still in
    /// flight at reset time is dropped when it arrives.
    pub fn reset(&self) {
        self.flight.reset();
    }

    /// Validate the input and, when valid, issue exactly one network call.
    ///
    /// Invalid input surfaces a notification and leaves state untouched —
    /// nothing reaches the network. Failures of the call itself (transport
    /// or service) land in `Failed` with a notification; nothing is
    /// retried.
    pub async fn submit(&self, description: &str, framework: Framework) {
        let request = match GenerationRequest::build(description, framework) {
            Ok(request) => request,
            Err(err) => {
                self.notifier.notify(&err.to_string(), NoticeKind::Error);
                return;
            }
        };

        let ticket = self.flight.begin();
        debug!(ticket, framework = %framework, "generation request in flight");

        match self.backend.generate(&request).await {
            Ok(artifact) => {
                if self.flight.finish(ticket, RequestState::Succeeded(artifact)) {
                    self.notifier
                        .notify("Code generated successfully", NoticeKind::Success);
                } else {
                    debug!(ticket, "discarding superseded generation response");
                }
            }
            Err(err) => {
                let reason = err.to_string();
                if self
                    .flight
                    .finish(ticket, RequestState::Failed(reason.clone()))
                {
                    self.notifier
                        .notify(&format!("Code generation failed: {}", reason), NoticeKind::Error);
                } else {
                    debug!(ticket, "discarding superseded generation failure");
                }
            }
        }
    }
}
