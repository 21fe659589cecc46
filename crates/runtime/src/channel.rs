//! Owned lifecycle around the compute worker.
//!
//! [`RecomputeChannel`] owns the worker task: one channel is created when a
//! UI surface mounts and shut down when it unmounts. [`RecomputeHandle`] is
//! the cloneable submission façade handed to the trigger; submissions never
//! block, and submissions after teardown fail with a typed error instead of
//! reaching into dead code paths.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::error::{ChannelError, Result};
use crate::protocol::{RecomputeRequest, RecomputeResponse};
use crate::workers::ComputeWorker;

/// Cloneable handle for submitting recompute requests.
#[derive(Clone)]
pub struct RecomputeHandle {
    request_tx: mpsc::UnboundedSender<RecomputeRequest>,
}

impl RecomputeHandle {
    /// Enqueue a request for the worker. Never blocks.
    ///
    /// # Errors
    ///
    /// [`ChannelError::Closed`] when the owning channel has been shut down;
    /// the request is never executed in that case.
    pub fn submit(&self, request: RecomputeRequest) -> Result<()> {
        self.request_tx
            .send(request)
            .map_err(|_| ChannelError::Closed)
    }
}

/// Receiving side of the response channel.
///
/// Responses arrive in submission order (single-consumer FIFO). The owner
/// is expected to feed them into [`crate::results::ResultsState`], which
/// discards stale ones.
pub struct ResponseStream {
    response_rx: mpsc::UnboundedReceiver<RecomputeResponse>,
}

impl ResponseStream {
    /// Wait for the next response; `None` once the worker has exited.
    pub async fn recv(&mut self) -> Option<RecomputeResponse> {
        self.response_rx.recv().await
    }

    /// Non-blocking poll for an already-delivered response.
    pub fn try_recv(&mut self) -> Option<RecomputeResponse> {
        self.response_rx.try_recv().ok()
    }
}

/// Owner of the compute worker's execution context.
pub struct RecomputeChannel {
    request_tx: mpsc::UnboundedSender<RecomputeRequest>,
    worker_handle: JoinHandle<()>,
}

impl RecomputeChannel {
    /// Spawn a fresh worker and return the channel plus its response stream.
    pub fn spawn() -> (Self, ResponseStream) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        let worker = ComputeWorker::new(request_rx, response_tx);
        let worker_handle = tokio::spawn(worker.run());
        info!("recompute channel spawned");

        (
            Self {
                request_tx,
                worker_handle,
            },
            ResponseStream { response_rx },
        )
    }

    /// Get a cloneable submission handle for the trigger.
    pub fn handle(&self) -> RecomputeHandle {
        RecomputeHandle {
            request_tx: self.request_tx.clone(),
        }
    }

    /// Enqueue a request directly on the owning channel.
    pub fn submit(&self, request: RecomputeRequest) -> Result<()> {
        self.handle().submit(request)
    }

    /// Tear the channel down, waiting for the worker to drain and exit.
    ///
    /// Outstanding handles stay valid as values but every later `submit`
    /// on them fails with [`ChannelError::Closed`].
    pub async fn shutdown(self) -> Result<()> {
        drop(self.request_tx);
        self.worker_handle
            .await
            .map_err(ChannelError::WorkerJoin)?;
        info!("recompute channel shut down");
        Ok(())
    }
}
