//! UI-side application of responses with stale-response suppression.
//!
//! Supersession is a response-side discard: the worker is never interrupted
//! mid-computation, but a response older than the newest submitted request
//! must not overwrite newer values. The highest token ever observed is
//! authoritative regardless of arrival order, which also holds up under a
//! transport that reorders deliveries.

use calc_core::ComputedValues;
use tracing::debug;

use crate::protocol::{ErrorKind, RecomputeResponse, RequestToken};

/// Outcome of feeding one response into [`ResultsState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The response updated the visible state.
    Applied,
    /// The response was superseded and discarded.
    Stale,
}

/// Latest computed values as the UI observes them.
///
/// Error responses never clear previously computed values; the UI keeps
/// the last-good results visible alongside the error.
#[derive(Debug, Default)]
pub struct ResultsState {
    values: Option<ComputedValues>,
    last_error: Option<ErrorKind>,
    latest_submitted: Option<RequestToken>,
    latest_applied: Option<RequestToken>,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a request with `token` was submitted.
    ///
    /// Any response carrying an older token is stale from this point on.
    pub fn note_submitted(&mut self, token: RequestToken) {
        if self.latest_submitted.is_none_or(|t| token > t) {
            self.latest_submitted = Some(token);
        }
    }

    /// Apply a response, discarding it if superseded.
    pub fn apply(&mut self, response: RecomputeResponse) -> ApplyOutcome {
        let token = response.token();

        let older_than_submitted = self.latest_submitted.is_some_and(|t| token < t);
        let not_newer_than_applied = self.latest_applied.is_some_and(|t| token <= t);
        if older_than_submitted || not_newer_than_applied {
            debug!(%token, "discarding stale response");
            return ApplyOutcome::Stale;
        }

        match response {
            RecomputeResponse::ComputedValues { data, .. } => {
                self.values = Some(data);
                self.last_error = None;
            }
            RecomputeResponse::Error { error, .. } => {
                self.last_error = Some(error);
            }
        }
        self.latest_applied = Some(token);
        ApplyOutcome::Applied
    }

    /// Most recently applied values, if any computation has completed.
    pub fn values(&self) -> Option<&ComputedValues> {
        self.values.as_ref()
    }

    /// Error from the most recent applied response, if it was an error.
    pub fn last_error(&self) -> Option<&ErrorKind> {
        self.last_error.as_ref()
    }
}
