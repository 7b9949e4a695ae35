//! Data-plane row writes used to drive log growth during tests.

use std::time::Duration;

use crate::directory::ReplicaHandle;
use crate::errors::Result;
use crate::proto::tablet::RowOperation;
use crate::proto::tablet::RowOperationType;
use crate::proto::tablet::WriteRequest;
use crate::utils::rpc::bounded;

/// Write one row of the fixed test schema (integer key, integer value,
/// text label) to `tablet_id` on this replica.
///
/// Deliberately does not check whether the target is the leader: writing
/// to a follower and asserting on the resulting error is itself a
/// scenario tests exercise.
pub async fn write_simple_test_row(
    replica: &ReplicaHandle,
    tablet_id: &str,
    op_type: RowOperationType,
    key: i32,
    int_val: i32,
    string_val: &str,
    rpc_timeout: Duration,
) -> Result<()> {
    let mut client = replica.tablet_client();
    let request = WriteRequest {
        tablet_id: tablet_id.to_string(),
        rows: vec![RowOperation::simple(op_type, key, int_val, string_val)],
    };
    let response = bounded(
        format!("{replica} Write({tablet_id})"),
        rpc_timeout,
        client.write(request),
    )
    .await?;

    match response.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}
