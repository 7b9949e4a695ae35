//! Error taxonomy for cluster verification operations.
//!
//! Every failure is a returned value for the calling test to assert on or
//! propagate; nothing here is fatal to the process.

use config::ConfigError;
use tonic::Code;
use tonic::Status;

use crate::proto::common::ReplicaError;
use crate::proto::common::ReplicaErrorCode;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// RPC-level connectivity or timeout failure. Always retryable by the
    /// caller, never silently retried inside single-shot probes.
    #[error("unreachable: {0}")]
    Unreachable(String),

    /// The queried entity (tablet or member) does not exist on that
    /// replica. A normal classification, not necessarily a failure.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation required leader role, which the target lacks.
    #[error("not leader: {0}")]
    NotLeader(String),

    /// The replica is alive but in a state that cannot serve the request.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// A bounded wait exhausted its deadline without satisfying its
    /// predicate. Distinct from `Unreachable`: the condition was not yet
    /// true, not "could not ask".
    #[error("timed out waiting for {0}")]
    TimedOut(String),

    /// Malformed or unexpected response shape.
    #[error("protocol error: {0}")]
    ProtocolError(String),

    /// Membership change is a no-op: the server is already in the config.
    #[error("already present: {0}")]
    AlreadyPresent(String),

    /// Membership change is a no-op: the server is not in the config.
    #[error("not present: {0}")]
    NotPresent(String),

    /// Harness configuration could not be loaded or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<Status> for HarnessError {
    fn from(status: Status) -> Self {
        let detail = format!("{}: {}", status.code(), status.message());
        match status.code() {
            Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled => {
                HarnessError::Unreachable(detail)
            }
            Code::NotFound => HarnessError::NotFound(detail),
            Code::FailedPrecondition | Code::Aborted => HarnessError::IllegalState(detail),
            _ => HarnessError::ProtocolError(detail),
        }
    }
}

impl From<ReplicaError> for HarnessError {
    fn from(error: ReplicaError) -> Self {
        let code = error.code();
        let message = error.message;
        match code {
            ReplicaErrorCode::TabletNotFound => HarnessError::NotFound(message),
            ReplicaErrorCode::NotLeader => HarnessError::NotLeader(message),
            ReplicaErrorCode::IllegalState => HarnessError::IllegalState(message),
            ReplicaErrorCode::AlreadyPresent => HarnessError::AlreadyPresent(message),
            ReplicaErrorCode::NotPresent => HarnessError::NotPresent(message),
            ReplicaErrorCode::UnknownError => HarnessError::ProtocolError(message),
        }
    }
}
