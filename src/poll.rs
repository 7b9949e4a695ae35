//! Deadline-bounded polling primitives.
//!
//! One generic retry engine, [`retry_until`]; every waiter below is a
//! thin parameterization of it, so timeout and backoff behavior stay
//! uniform across the harness.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;
use tracing::warn;

use crate::config::HarnessConfig;
use crate::directory::ReplicaHandle;
use crate::errors::HarnessError;
use crate::errors::Result;
use crate::probe;
use crate::probe::LeaderStatus;
use crate::proto::common::MemberType;
use crate::utils::time::Deadline;

/// Repeatedly run `attempt` until `accept` holds for its output or the
/// deadline passes.
///
/// The first attempt runs immediately with no initial sleep; afterwards
/// the engine sleeps a fixed `interval` and re-checks the deadline
/// before each attempt. A failing attempt is remembered, not surfaced:
/// when the deadline passes, the last-seen error wins over a bare
/// `TimedOut` since it tells the caller more. An attempt already in
/// flight when the deadline expires is allowed to finish; no new one is
/// issued after it.
pub async fn retry_until<F, Fut, T, P>(
    deadline: Deadline,
    interval: Duration,
    what: &str,
    mut attempt: F,
    mut accept: P,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    P: FnMut(&T) -> bool,
{
    let mut last_err: Option<HarnessError> = None;
    loop {
        match attempt().await {
            Ok(value) => {
                if accept(&value) {
                    return Ok(value);
                }
                last_err = None;
            }
            Err(e) => {
                debug!("waiting for {what}: attempt failed: {e}");
                last_err = Some(e);
            }
        }

        if deadline.expired() {
            break;
        }
        sleep(interval).await;
        if deadline.expired() {
            break;
        }
    }

    warn!("gave up waiting for {what}");
    Err(match last_err {
        Some(e) => e,
        None => HarnessError::TimedOut(what.to_string()),
    })
}

/// Wait until every replica reports the identical log position and that
/// position's index is at least `minimum_index`.
///
/// Stricter than [`wait_until_all_replicas_have_op`]: the set must also
/// have stopped advancing relative to itself at the moment of a check.
/// Every replica must answer every attempt; an unreachable replica
/// counts as not-yet-converged, and if that persists to the deadline its
/// error is what the caller sees.
pub async fn wait_for_servers_to_agree(
    replicas: &[Arc<ReplicaHandle>],
    tablet_id: &str,
    minimum_index: u64,
    timeout: Duration,
    config: &HarnessConfig,
) -> Result<()> {
    let deadline = Deadline::after(timeout);
    let what = format!("servers to agree on tablet {tablet_id} at index >= {minimum_index}");
    retry_until(
        deadline,
        config.retry_interval(),
        &what,
        || probe::get_last_op_id_for_each(tablet_id, replicas, config.rpc_timeout()),
        |op_ids| {
            let mut values = op_ids.values();
            match values.next() {
                Some(first) => first.index >= minimum_index && values.all(|op| op == first),
                None => true,
            }
        },
    )
    .await
    .map(|_| ())
}

/// Wait until every replica has independently logged at least
/// `minimum_index`. The replicas need not match each other.
pub async fn wait_until_all_replicas_have_op(
    minimum_index: u64,
    tablet_id: &str,
    replicas: &[Arc<ReplicaHandle>],
    timeout: Duration,
    config: &HarnessConfig,
) -> Result<()> {
    let deadline = Deadline::after(timeout);
    let what = format!("all replicas of tablet {tablet_id} to reach index >= {minimum_index}");
    retry_until(
        deadline,
        config.retry_interval(),
        &what,
        || probe::get_last_op_id_for_each(tablet_id, replicas, config.rpc_timeout()),
        |op_ids| op_ids.values().all(|op| op.index >= minimum_index),
    )
    .await
    .map(|_| ())
}

/// Wait until the committed config reported by `replica` counts exactly
/// `expected_voters` voting members.
pub async fn wait_until_committed_voters_are(
    expected_voters: usize,
    replica: &ReplicaHandle,
    tablet_id: &str,
    timeout: Duration,
    config: &HarnessConfig,
) -> Result<()> {
    let deadline = Deadline::after(timeout);
    let what = format!("tablet {tablet_id} to commit a config with {expected_voters} voters");
    retry_until(
        deadline,
        config.retry_interval(),
        &what,
        || probe::get_consensus_state(replica, tablet_id, config.rpc_timeout()),
        |state| {
            let voters = state
                .committed_config
                .as_ref()
                .map(|c| {
                    c.peers
                        .iter()
                        .filter(|peer| peer.member_type() == MemberType::Voter)
                        .count()
                })
                .unwrap_or(0);
            voters == expected_voters
        },
    )
    .await
    .map(|_| ())
}

/// Wait until `replica` reports itself leader of `tablet_id`.
///
/// A `NotFound` classification while polling means "not yet" — the
/// replica may simply not have joined the group — not failure.
pub async fn wait_until_leader(
    replica: &ReplicaHandle,
    tablet_id: &str,
    timeout: Duration,
    config: &HarnessConfig,
) -> Result<()> {
    let deadline = Deadline::after(timeout);
    let what = format!("{replica} to become leader of tablet {tablet_id}");
    retry_until(
        deadline,
        config.retry_interval(),
        &what,
        || probe::get_leader_status(replica, tablet_id, config.rpc_timeout()),
        |status| *status == LeaderStatus::Leader,
    )
    .await
    .map(|_| ())
}
