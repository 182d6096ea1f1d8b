//! Batch-then-join dispatch of a run's requests.
mod batches;
mod dispatcher;
mod slots;


pub use batches::batch_ranges;
pub use dispatcher::{BatchDispatcher, DispatchPhase, LoadTestRun};
