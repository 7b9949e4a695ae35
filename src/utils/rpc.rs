use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;
use tonic::Response;
use tonic::Status;

use crate::errors::HarnessError;
use crate::errors::Result;

/// Run one RPC future under a hard per-call timeout.
///
/// An elapsed timer means the peer did not answer: `Unreachable`. Nothing
/// here retries; single-shot probes surface the first failure.
pub(crate) async fn bounded<T, F>(
    what: String,
    limit: Duration,
    call: F,
) -> Result<T>
where
    F: Future<Output = std::result::Result<Response<T>, Status>>,
{
    match timeout(limit, call).await {
        Ok(Ok(response)) => Ok(response.into_inner()),
        Ok(Err(status)) => Err(status.into()),
        Err(_) => Err(HarnessError::Unreachable(format!(
            "{what}: no response within {limit:?}"
        ))),
    }
}
