//! Single-RPC state probes against one replica.
//!
//! Each probe is a point-in-time snapshot: two probes separated in time
//! never imply a consistent global view. Failures surface immediately;
//! retries belong to the polling layer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use tracing::debug;

use crate::directory::ReplicaHandle;
use crate::errors::HarnessError;
use crate::errors::Result;
use crate::proto::common::ConsensusState;
use crate::proto::common::OpId;
use crate::proto::consensus::GetConsensusStateRequest;
use crate::proto::consensus::GetLastOpIdRequest;
use crate::utils::rpc::bounded;

/// Leader-or-not classification of one replica for one tablet.
///
/// "Node unreachable" is a true error and never appears here; every
/// variant means the replica answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderStatus {
    Leader,
    NotLeader,
    /// The replica answered but is not a live member of the tablet's
    /// consensus group.
    NotFound,
}

/// Fetch the last-written log position of `tablet_id` on one replica.
pub async fn get_last_op_id(
    replica: &ReplicaHandle,
    tablet_id: &str,
    rpc_timeout: Duration,
) -> Result<OpId> {
    let mut client = replica.consensus_client();
    let request = GetLastOpIdRequest {
        tablet_id: tablet_id.to_string(),
    };
    let response = bounded(
        format!("{replica} GetLastOpId({tablet_id})"),
        rpc_timeout,
        client.get_last_op_id(request),
    )
    .await?;

    if let Some(error) = response.error {
        return Err(error.into());
    }
    let op_id = response.op_id.ok_or_else(|| {
        HarnessError::ProtocolError(format!("{replica} returned no op id for tablet {tablet_id}"))
    })?;
    debug!(uuid = %replica.uuid(), %tablet_id, %op_id, "last op id");
    Ok(op_id)
}

/// Fan out [`get_last_op_id`] to every replica in the set, keyed by
/// replica uuid.
///
/// Fail-fast: one failing replica aborts the whole batch and surfaces
/// that error, since agreement cannot be assessed from an incomplete
/// set. Callers needing partial tolerance probe per replica.
pub async fn get_last_op_id_for_each(
    tablet_id: &str,
    replicas: &[Arc<ReplicaHandle>],
    rpc_timeout: Duration,
) -> Result<HashMap<String, OpId>> {
    let probes = replicas.iter().map(|replica| async move {
        let op_id = get_last_op_id(replica, tablet_id, rpc_timeout).await?;
        Ok::<_, HarnessError>((replica.uuid().to_string(), op_id))
    });
    Ok(try_join_all(probes).await?.into_iter().collect())
}

/// Fetch the committed consensus state of `tablet_id` as this replica
/// currently knows it. Other replicas may believe something else.
pub async fn get_consensus_state(
    replica: &ReplicaHandle,
    tablet_id: &str,
    rpc_timeout: Duration,
) -> Result<ConsensusState> {
    let mut client = replica.consensus_client();
    let request = GetConsensusStateRequest {
        tablet_id: tablet_id.to_string(),
    };
    let response = bounded(
        format!("{replica} GetConsensusState({tablet_id})"),
        rpc_timeout,
        client.get_consensus_state(request),
    )
    .await?;

    if let Some(error) = response.error {
        return Err(error.into());
    }
    response.state.ok_or_else(|| {
        HarnessError::ProtocolError(format!(
            "{replica} returned no consensus state for tablet {tablet_id}"
        ))
    })
}

/// Classify `replica` with respect to `tablet_id`.
///
/// The answer is derived from a single consensus-state snapshot: not a
/// committed member of the group (or the tablet is unknown there) means
/// [`LeaderStatus::NotFound`]; a member that is not the reported leader
/// means [`LeaderStatus::NotLeader`]. Transport failures stay errors.
pub async fn get_leader_status(
    replica: &ReplicaHandle,
    tablet_id: &str,
    rpc_timeout: Duration,
) -> Result<LeaderStatus> {
    let state = match get_consensus_state(replica, tablet_id, rpc_timeout).await {
        Ok(state) => state,
        Err(HarnessError::NotFound(_)) => return Ok(LeaderStatus::NotFound),
        Err(e) => return Err(e),
    };

    let config = state.committed_config.unwrap_or_default();
    if !config.peers.iter().any(|peer| peer.uuid == replica.uuid()) {
        return Ok(LeaderStatus::NotFound);
    }
    if state.leader_uuid == replica.uuid() {
        Ok(LeaderStatus::Leader)
    } else {
        Ok(LeaderStatus::NotLeader)
    }
}
