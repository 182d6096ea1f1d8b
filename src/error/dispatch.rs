use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Request task {index} did not finish: {source}")]
    TaskFailed {
        index: usize,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("No record was written for request {index}.")]
    MissingRecord { index: usize },
    #[error("Record slots are still shared after all batches joined.")]
    SlotsStillShared,
}
