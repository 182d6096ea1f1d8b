use std::sync::Arc;

use tracing::info;

use crate::dispatch::{BatchDispatcher, LoadTestRun};
use crate::domain::LoadTestConfig;
use crate::error::AppResult;
use crate::http::{HttpExecutor, build_client};

pub(crate) async fn run_load_test(config: LoadTestConfig) -> AppResult<LoadTestRun> {
    info!(
        "Sending {} requests to {} ({} at a time, {} batches)",
        config.request_count(),
        config.target_url(),
        config.concurrency(),
        config.batch_count()
    );

    let client = build_client(&config)?;
    let executor = Arc::new(HttpExecutor::new(client));
    let mut dispatcher = BatchDispatcher::new(config, executor);
    let run = dispatcher.run().await?;

    let report = &run.report;
    info!(
        "Finished: {} ok, {} non-2xx, {} transport errors, {} timeouts, {} invalid requests",
        report.success_count,
        report.non_success_status,
        report.transport_errors,
        report.timeouts,
        report.construction_errors
    );
    Ok(run)
}
