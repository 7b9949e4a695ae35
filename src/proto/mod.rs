//! Protocol Buffer definitions and generated code for the RPC surfaces
//! the harness drives: the directory service, and the consensus-control,
//! data, and administrative planes of each replica.
//!
//! Generated sources are committed under `src/generated/`; the `.proto`
//! contracts live in the repository's `proto/` directory.

pub mod common {
    include!("../generated/verify.common.rs");
}

pub mod directory {
    include!("../generated/verify.directory.rs");
}

pub mod consensus {
    include!("../generated/verify.consensus.rs");
}

pub mod tablet {
    include!("../generated/verify.tablet.rs");
}

use std::cmp::Ordering;

use common::OpId;
use common::ReplicaError;
use common::ReplicaErrorCode;
use tablet::RowOperation;
use tablet::RowOperationType;

impl OpId {
    /// The position every replica reports before its log holds anything.
    pub const MIN: OpId = OpId { term: 0, index: 0 };
}

impl Eq for OpId {}

impl Ord for OpId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.term.cmp(&other.term).then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for OpId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for OpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.term, self.index)
    }
}

impl ReplicaError {
    pub fn new(
        code: ReplicaErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl RowOperation {
    /// One row of the fixed test schema.
    pub fn simple(
        op_type: RowOperationType,
        key: i32,
        int_val: i32,
        string_val: impl Into<String>,
    ) -> Self {
        Self {
            op_type: op_type.into(),
            key,
            int_val,
            string_val: string_val.into(),
        }
    }
}
