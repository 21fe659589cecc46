//! Errors surfaced by the channel lifecycle.
//!
//! Faults inside a computation travel back as typed
//! [`crate::protocol::ErrorKind`] responses; this module only covers
//! failures of the transport itself.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChannelError>;

#[derive(Debug, Error)]
pub enum ChannelError {
    /// The channel was torn down before the request could be submitted.
    #[error("recompute channel closed")]
    Closed,

    /// The compute worker task panicked or was cancelled.
    #[error("compute worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
