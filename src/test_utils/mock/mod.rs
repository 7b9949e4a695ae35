mod mock_rpc_service;

pub use mock_rpc::*;
pub use mock_rpc_service::*;
