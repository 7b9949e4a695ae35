//! Discovery and ownership of the cluster's replica handles.
//!
//! [`ClusterDirectory`] is built once from the central directory service
//! and owns every [`ReplicaHandle`]; dropping the directory releases all
//! of their RPC resources.

mod directory;
mod replica;

pub use directory::*;
pub use replica::*;
