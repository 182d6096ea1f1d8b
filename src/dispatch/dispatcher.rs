use std::fmt;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::domain::LoadTestConfig;
use crate::error::{AppError, AppResult, DispatchError};
use crate::http::{RequestExecutor, RequestTarget};
use crate::metrics::{LoadTestReport, RequestOutcome, RequestRecord};

use super::batches::batch_ranges;
use super::slots::{RecordSlots, SlotWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPhase {
    Idle,
    Dispatching { batch: usize, of: usize },
    Reducing,
    Done,
}

impl fmt::Display for DispatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchPhase::Idle => f.write_str("idle"),
            DispatchPhase::Dispatching { batch, of } => write!(f, "dispatching batch {batch}/{of}"),
            DispatchPhase::Reducing => f.write_str("reducing"),
            DispatchPhase::Done => f.write_str("done"),
        }
    }
}

/// Records and report of a finished run. `records[i]` belongs to request `i`.
#[derive(Debug)]
pub struct LoadTestRun {
    pub records: Vec<RequestRecord>,
    pub report: LoadTestReport,
}

/// Sends `request_count` requests in sequential batches of `concurrency`,
/// joining each batch completely before the next one starts.
pub struct BatchDispatcher<E> {
    config: LoadTestConfig,
    executor: Arc<E>,
    phase: DispatchPhase,
}

impl<E> BatchDispatcher<E>
where
    E: RequestExecutor + 'static,
{
    #[must_use]
    pub const fn new(config: LoadTestConfig, executor: Arc<E>) -> Self {
        Self {
            config,
            executor,
            phase: DispatchPhase::Idle,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> DispatchPhase {
        self.phase
    }

    /// Runs every batch, then reduces the records into a report.
    ///
    /// Request failures are recorded, never returned.
    ///
    /// # Errors
    ///
    /// Returns an error only when a request task panics or is cancelled, since
    /// its record slot would be left empty.
    pub async fn run(&mut self) -> AppResult<LoadTestRun> {
        let total = self.config.request_count();
        let batch_count = self.config.batch_count();
        let batch_size = self.config.concurrency_limit();
        let target = Arc::new(RequestTarget::new(
            self.config.target_url().to_owned(),
            self.config.request_timeout(),
        ));
        let mut slots = RecordSlots::new(total);

        for (batch_index, range) in batch_ranges(total, batch_size).enumerate() {
            self.enter(DispatchPhase::Dispatching {
                batch: batch_index.saturating_add(1),
                of: batch_count,
            });
            let writers = slots.take_writers(range.len());
            self.run_batch(&target, writers).await?;
            debug!("Batch {}/{} joined", batch_index.saturating_add(1), batch_count);
        }

        self.enter(DispatchPhase::Reducing);
        let records = slots.into_records().map_err(AppError::dispatch)?;
        let report = LoadTestReport::from_records(&records);
        self.enter(DispatchPhase::Done);

        Ok(LoadTestRun { records, report })
    }

    async fn run_batch(
        &self,
        target: &Arc<RequestTarget>,
        writers: Vec<SlotWriter>,
    ) -> AppResult<()> {
        let mut indices = Vec::with_capacity(writers.len());
        let mut handles = Vec::with_capacity(writers.len());
        for writer in writers {
            let executor = Arc::clone(&self.executor);
            let target = Arc::clone(target);
            indices.push(writer.index());
            handles.push(tokio::spawn(async move {
                let record = executor.execute(&target).await;
                if let RequestOutcome::Failure { error } = record.outcome() {
                    warn!("Request {} failed: {}", writer.index(), error);
                }
                writer.write(record);
            }));
        }

        // Wait for the whole batch, even when a task failed.
        let results = join_all(handles).await;
        for (index, result) in indices.into_iter().zip(results) {
            result.map_err(|source| {
                AppError::dispatch(DispatchError::TaskFailed { index, source })
            })?;
        }
        Ok(())
    }

    fn enter(&mut self, phase: DispatchPhase) {
        debug!("Dispatcher {} -> {}", self.phase, phase);
        self.phase = phase;
    }
}
