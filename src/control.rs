//! Mutating operations against a single replica.
//!
//! Each call is synchronous only with respect to its one RPC, never with
//! respect to eventual cluster convergence; compose with the waiters in
//! [`crate::poll`] for that.

use std::time::Duration;

use tracing::debug;

use crate::directory::ReplicaHandle;
use crate::errors::Result;
use crate::proto::common::MemberType;
use crate::proto::common::RaftPeer;
use crate::proto::consensus::ChangeConfigRequest;
use crate::proto::consensus::ChangeConfigType;
use crate::proto::consensus::LeaderStepDownRequest;
use crate::proto::consensus::RunLeaderElectionRequest;
use crate::proto::tablet::DeleteReplicaRequest;
use crate::utils::rpc::bounded;

/// Ask `replica` to start a leader election for `tablet_id`.
///
/// Succeeds once the target acknowledges receipt of the request; it
/// never waits for the election to complete or for a leader to emerge.
/// Use [`crate::poll::wait_until_leader`] for the outcome.
pub async fn start_election(
    replica: &ReplicaHandle,
    tablet_id: &str,
    rpc_timeout: Duration,
) -> Result<()> {
    let mut client = replica.consensus_client();
    let request = RunLeaderElectionRequest {
        tablet_id: tablet_id.to_string(),
    };
    debug!(uuid = %replica.uuid(), %tablet_id, "requesting election");
    let response = bounded(
        format!("{replica} RunLeaderElection({tablet_id})"),
        rpc_timeout,
        client.run_leader_election(request),
    )
    .await?;

    match response.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Ask the current leader to relinquish leadership of `tablet_id`.
///
/// Synchronous with respect to the leader stepping down locally; a new
/// leader need not exist by return time. Calling this on a replica that
/// is not the leader yields the replica's error detail, not a hang.
pub async fn leader_step_down(
    replica: &ReplicaHandle,
    tablet_id: &str,
    rpc_timeout: Duration,
) -> Result<()> {
    let mut client = replica.consensus_client();
    let request = LeaderStepDownRequest {
        tablet_id: tablet_id.to_string(),
    };
    debug!(uuid = %replica.uuid(), %tablet_id, "requesting step-down");
    let response = bounded(
        format!("{replica} LeaderStepDown({tablet_id})"),
        rpc_timeout,
        client.leader_step_down(request),
    )
    .await?;

    match response.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Run a config change to add `to_add` to the group, addressed to the
/// believed leader.
///
/// Completion means the change was accepted and will be replicated, not
/// that it has committed cluster-wide; compose with
/// [`crate::poll::wait_until_committed_voters_are`] for the latter.
pub async fn add_server(
    leader: &ReplicaHandle,
    tablet_id: &str,
    to_add: &ReplicaHandle,
    member_type: MemberType,
    rpc_timeout: Duration,
) -> Result<()> {
    let server = RaftPeer {
        uuid: to_add.uuid().to_string(),
        member_type: member_type.into(),
        last_known_addr: to_add.registration.rpc_addresses.first().cloned(),
        ..Default::default()
    };
    change_config(leader, tablet_id, ChangeConfigType::AddServer, server, rpc_timeout).await
}

/// Run a config change to remove `to_remove` from the group, addressed
/// to the believed leader.
pub async fn remove_server(
    leader: &ReplicaHandle,
    tablet_id: &str,
    to_remove: &ReplicaHandle,
    rpc_timeout: Duration,
) -> Result<()> {
    let server = RaftPeer {
        uuid: to_remove.uuid().to_string(),
        ..Default::default()
    };
    change_config(leader, tablet_id, ChangeConfigType::RemoveServer, server, rpc_timeout).await
}

async fn change_config(
    leader: &ReplicaHandle,
    tablet_id: &str,
    change_type: ChangeConfigType,
    server: RaftPeer,
    rpc_timeout: Duration,
) -> Result<()> {
    let mut client = leader.consensus_client();
    let request = ChangeConfigRequest {
        tablet_id: tablet_id.to_string(),
        change_type: change_type.into(),
        server: Some(server),
    };
    debug!(
        uuid = %leader.uuid(),
        %tablet_id,
        change_type = change_type.as_str_name(),
        "requesting config change"
    );
    let response = bounded(
        format!("{leader} ChangeConfig({tablet_id})"),
        rpc_timeout,
        client.change_config(request),
    )
    .await?;

    match response.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Drop `replica`'s copy of `tablet_id` through the administrative plane.
pub async fn delete_replica(
    replica: &ReplicaHandle,
    tablet_id: &str,
    rpc_timeout: Duration,
) -> Result<()> {
    let mut client = replica.admin_client();
    let request = DeleteReplicaRequest {
        tablet_id: tablet_id.to_string(),
    };
    debug!(uuid = %replica.uuid(), %tablet_id, "deleting replica");
    let response = bounded(
        format!("{replica} DeleteReplica({tablet_id})"),
        rpc_timeout,
        client.delete_replica(request),
    )
    .await?;

    match response.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}
