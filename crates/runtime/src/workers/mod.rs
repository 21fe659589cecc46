//! Worker tasks that back the recompute channel.
//!
//! A single compute worker serves one UI surface; additional surfaces get
//! independent workers with no coordination between them.

mod compute;

pub use compute::ComputeWorker;
