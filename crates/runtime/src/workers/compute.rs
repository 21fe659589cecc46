//! Compute worker that drives [`calc_core::compute`] off the main context.
//!
//! Receives requests from [`crate::channel::RecomputeHandle`], runs the
//! engine, and sends exactly one response per request back over the
//! response channel. Single consumer over a FIFO queue, so responses leave
//! in submission order.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::protocol::{RecomputeRequest, RecomputeResponse};

/// Background task that processes recompute requests.
///
/// The worker is logically stateless: every request carries a fully
/// independent snapshot pair, and nothing persists between computations.
/// An engine fault is answered as an error response and the loop keeps
/// serving subsequent requests.
pub struct ComputeWorker {
    request_rx: mpsc::UnboundedReceiver<RecomputeRequest>,
    response_tx: mpsc::UnboundedSender<RecomputeResponse>,
}

impl ComputeWorker {
    pub(crate) fn new(
        request_rx: mpsc::UnboundedReceiver<RecomputeRequest>,
        response_tx: mpsc::UnboundedSender<RecomputeResponse>,
    ) -> Self {
        Self {
            request_rx,
            response_tx,
        }
    }

    /// Main worker loop; exits when the request channel closes.
    pub async fn run(mut self) {
        while let Some(request) = self.request_rx.recv().await {
            self.handle_request(request);
        }
        debug!("request channel closed, compute worker exiting");
    }

    fn handle_request(&self, request: RecomputeRequest) {
        let RecomputeRequest { token, data } = request;
        debug!(%token, monster = %data.monster.name, "recomputing values");

        let response = match calc_core::compute(&data.player, &data.monster) {
            Ok(values) => RecomputeResponse::ComputedValues {
                token,
                data: values,
            },
            Err(err) => {
                warn!(%token, error = %err, "engine fault");
                RecomputeResponse::Error {
                    token,
                    error: err.into(),
                }
            }
        };

        if self.response_tx.send(response).is_err() {
            debug!(%token, "response channel closed (receiver dropped)");
        }
    }
}
