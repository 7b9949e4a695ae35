//! Step-down is synchronous on the leader side only and must stay a
//! defined error when repeated against a replica that already yielded.

use quorum_harness::get_leader_status;
use quorum_harness::leader_step_down;
use quorum_harness::HarnessConfig;
use quorum_harness::HarnessError;
use quorum_harness::LeaderStatus;
use tracing_test::traced_test;

use crate::common::FakeCluster;

const TABLET_ID: &str = "tablet-step-down";

#[tokio::test]
#[traced_test]
async fn test_step_down_relinquishes_locally() {
    let cluster = FakeCluster::start(3, 3, TABLET_ID).await;
    let config = HarnessConfig::default();
    let directory = cluster.directory(&config).await;

    let leader = directory.server("r1").expect("leader registered");
    let status = get_leader_status(leader, TABLET_ID, config.rpc_timeout())
        .await
        .unwrap();
    assert_eq!(status, LeaderStatus::Leader);

    leader_step_down(leader, TABLET_ID, config.rpc_timeout())
        .await
        .expect("the leader steps down");

    // No successor is guaranteed by return time; the old leader simply
    // no longer reports the role.
    let status = get_leader_status(leader, TABLET_ID, config.rpc_timeout())
        .await
        .unwrap();
    assert_eq!(status, LeaderStatus::NotLeader);

    cluster.shutdown();
}

#[tokio::test]
#[traced_test]
async fn test_repeated_step_down_is_a_defined_error() {
    let cluster = FakeCluster::start(3, 3, TABLET_ID).await;
    let config = HarnessConfig::default();
    let directory = cluster.directory(&config).await;

    let leader = directory.server("r1").expect("leader registered");
    leader_step_down(leader, TABLET_ID, config.rpc_timeout())
        .await
        .expect("first step-down succeeds");

    let result = leader_step_down(leader, TABLET_ID, config.rpc_timeout()).await;
    assert!(matches!(result, Err(HarnessError::IllegalState(_))));

    cluster.shutdown();
}
