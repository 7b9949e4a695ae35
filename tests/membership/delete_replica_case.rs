//! Dropping a replica's copy of a tablet through the admin plane, and
//! what the probes report afterwards.

use quorum_harness::delete_replica;
use quorum_harness::get_last_op_id;
use quorum_harness::get_leader_status;
use quorum_harness::HarnessConfig;
use quorum_harness::HarnessError;
use quorum_harness::LeaderStatus;
use tracing_test::traced_test;

use crate::common::FakeCluster;

const TABLET_ID: &str = "tablet-delete-replica";

#[tokio::test]
#[traced_test]
async fn test_deleted_replica_reports_not_found() {
    let cluster = FakeCluster::start(3, 3, TABLET_ID).await;
    let config = HarnessConfig::default();
    let mut directory = cluster.directory(&config).await;

    directory
        .refresh_placement(config.rpc_timeout())
        .await
        .expect("placement refresh should succeed");
    assert_eq!(directory.lookup_tablet(TABLET_ID).len(), 3);

    let victim = directory.server("r3").expect("member registered").clone();
    delete_replica(&victim, TABLET_ID, config.rpc_timeout())
        .await
        .expect("delete succeeds");

    // The replica stays reachable; only the tablet is gone.
    let result = get_last_op_id(&victim, TABLET_ID, config.rpc_timeout()).await;
    assert!(matches!(result, Err(HarnessError::NotFound(_))));
    let status = get_leader_status(&victim, TABLET_ID, config.rpc_timeout())
        .await
        .unwrap();
    assert_eq!(status, LeaderStatus::NotFound);

    // Deleting again is a defined NotFound, not a crash.
    let result = delete_replica(&victim, TABLET_ID, config.rpc_timeout()).await;
    assert!(matches!(result, Err(HarnessError::NotFound(_))));

    // A fresh placement sweep reflects the deletion.
    directory
        .refresh_placement(config.rpc_timeout())
        .await
        .expect("placement refresh should succeed");
    assert_eq!(directory.lookup_tablet(TABLET_ID).len(), 2);

    cluster.shutdown();
}
