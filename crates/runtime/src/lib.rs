//! Asynchronous recompute protocol around the calculation engine.
//!
//! The engine itself ([`calc_core::compute`]) is a pure synchronous
//! function; this crate runs it off the caller's execution context and
//! defines the request/response contract that feeds it state updates
//! without blocking the editing surface:
//!
//! - [`protocol`] - tagged request/response messages with sequence tokens
//! - [`workers`] - the background compute worker task
//! - [`channel`] - owned channel lifecycle (spawn on mount, shutdown on
//!   unmount) and the cloneable submission handle
//! - [`trigger`] - change detection over the editable forms, coalescing a
//!   burst of edits into a single request per update step
//! - [`results`] - UI-side application of responses with stale-response
//!   suppression

pub mod channel;
pub mod error;
pub mod protocol;
pub mod results;
pub mod trigger;
pub mod workers;

pub use channel::{RecomputeChannel, RecomputeHandle, ResponseStream};
pub use error::{ChannelError, Result};
pub use protocol::{ErrorKind, RecomputeRequest, RecomputeResponse, RequestToken, SnapshotPair};
pub use results::{ApplyOutcome, ResultsState};
pub use trigger::{RecomputeTrigger, TriggerState};
