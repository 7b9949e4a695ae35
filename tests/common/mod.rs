//! Shared helpers for integration tests: a stateful in-process fake
//! cluster served over real gRPC on ephemeral ports.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use quorum_harness::proto::common::ConsensusState;
use quorum_harness::proto::common::MemberType;
use quorum_harness::proto::common::OpId;
use quorum_harness::proto::common::RaftConfig;
use quorum_harness::proto::common::RaftPeer;
use quorum_harness::proto::common::ReplicaError;
use quorum_harness::proto::common::ReplicaErrorCode;
use quorum_harness::proto::consensus::consensus_service_server::ConsensusService;
use quorum_harness::proto::consensus::consensus_service_server::ConsensusServiceServer;
use quorum_harness::proto::consensus::ChangeConfigRequest;
use quorum_harness::proto::consensus::ChangeConfigResponse;
use quorum_harness::proto::consensus::ChangeConfigType;
use quorum_harness::proto::consensus::GetConsensusStateRequest;
use quorum_harness::proto::consensus::GetConsensusStateResponse;
use quorum_harness::proto::consensus::GetLastOpIdRequest;
use quorum_harness::proto::consensus::GetLastOpIdResponse;
use quorum_harness::proto::consensus::LeaderStepDownRequest;
use quorum_harness::proto::consensus::LeaderStepDownResponse;
use quorum_harness::proto::consensus::RunLeaderElectionRequest;
use quorum_harness::proto::consensus::RunLeaderElectionResponse;
use quorum_harness::proto::directory::directory_service_client::DirectoryServiceClient;
use quorum_harness::proto::directory::directory_service_server::DirectoryService;
use quorum_harness::proto::directory::directory_service_server::DirectoryServiceServer;
use quorum_harness::proto::directory::ListServersRequest;
use quorum_harness::proto::directory::ListServersResponse;
use quorum_harness::proto::directory::ServerEntry;
use quorum_harness::proto::common::HostPort;
use quorum_harness::proto::common::NodeInstance;
use quorum_harness::proto::common::Registration;
use quorum_harness::proto::tablet::tablet_admin_service_server::TabletAdminService;
use quorum_harness::proto::tablet::tablet_admin_service_server::TabletAdminServiceServer;
use quorum_harness::proto::tablet::tablet_service_server::TabletService;
use quorum_harness::proto::tablet::tablet_service_server::TabletServiceServer;
use quorum_harness::proto::tablet::DeleteReplicaRequest;
use quorum_harness::proto::tablet::DeleteReplicaResponse;
use quorum_harness::proto::tablet::ListTabletsRequest;
use quorum_harness::proto::tablet::ListTabletsResponse;
use quorum_harness::proto::tablet::WriteRequest;
use quorum_harness::proto::tablet::WriteResponse;
use quorum_harness::ClusterDirectory;
use quorum_harness::HarnessConfig;
use quorum_harness::ReplicaHandle;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct TabletState {
    pub last_op_id: OpId,
    pub consensus: ConsensusState,
    pub election_requests: u64,
}

pub struct ReplicaState {
    pub uuid: String,
    pub tablets: HashMap<String, TabletState>,
}

/// One fake replica process: real gRPC surface, in-memory state the test
/// can read and mutate to script scenarios (catch-up, elections, ...).
#[derive(Clone)]
pub struct FakeReplica {
    state: Arc<Mutex<ReplicaState>>,
}

fn not_hosted(tablet_id: &str) -> ReplicaError {
    ReplicaError::new(
        ReplicaErrorCode::TabletNotFound,
        format!("tablet {tablet_id} not hosted on this replica"),
    )
}

impl FakeReplica {
    pub fn new(uuid: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(ReplicaState {
                uuid: uuid.to_string(),
                tablets: HashMap::new(),
            })),
        }
    }

    pub fn host_tablet(
        &self,
        tablet_id: &str,
        consensus: ConsensusState,
    ) {
        self.state.lock().tablets.insert(
            tablet_id.to_string(),
            TabletState {
                last_op_id: OpId::MIN,
                consensus,
                election_requests: 0,
            },
        );
    }

    pub fn last_op_id(
        &self,
        tablet_id: &str,
    ) -> OpId {
        self.state.lock().tablets[tablet_id].last_op_id
    }

    pub fn set_last_op_id(
        &self,
        tablet_id: &str,
        op_id: OpId,
    ) {
        self.state
            .lock()
            .tablets
            .get_mut(tablet_id)
            .expect("tablet hosted")
            .last_op_id = op_id;
    }

    /// Rewrite who this replica believes is leader, as an election or
    /// replication of the leader's view would.
    pub fn set_leader_view(
        &self,
        tablet_id: &str,
        leader_uuid: &str,
    ) {
        let mut state = self.state.lock();
        let tablet = state.tablets.get_mut(tablet_id).expect("tablet hosted");
        tablet.consensus.leader_uuid = leader_uuid.to_string();
    }

    pub fn election_requests(
        &self,
        tablet_id: &str,
    ) -> u64 {
        self.state.lock().tablets[tablet_id].election_requests
    }
}

#[tonic::async_trait]
impl ConsensusService for FakeReplica {
    async fn get_last_op_id(
        &self,
        request: tonic::Request<GetLastOpIdRequest>,
    ) -> Result<tonic::Response<GetLastOpIdResponse>, tonic::Status> {
        let tablet_id = request.into_inner().tablet_id;
        let state = self.state.lock();
        let response = match state.tablets.get(&tablet_id) {
            Some(tablet) => GetLastOpIdResponse {
                op_id: Some(tablet.last_op_id),
                error: None,
            },
            None => GetLastOpIdResponse {
                op_id: None,
                error: Some(not_hosted(&tablet_id)),
            },
        };
        Ok(tonic::Response::new(response))
    }

    async fn get_consensus_state(
        &self,
        request: tonic::Request<GetConsensusStateRequest>,
    ) -> Result<tonic::Response<GetConsensusStateResponse>, tonic::Status> {
        let tablet_id = request.into_inner().tablet_id;
        let state = self.state.lock();
        let response = match state.tablets.get(&tablet_id) {
            Some(tablet) => GetConsensusStateResponse {
                state: Some(tablet.consensus.clone()),
                error: None,
            },
            None => GetConsensusStateResponse {
                state: None,
                error: Some(not_hosted(&tablet_id)),
            },
        };
        Ok(tonic::Response::new(response))
    }

    async fn run_leader_election(
        &self,
        request: tonic::Request<RunLeaderElectionRequest>,
    ) -> Result<tonic::Response<RunLeaderElectionResponse>, tonic::Status> {
        let tablet_id = request.into_inner().tablet_id;
        let mut state = self.state.lock();
        let response = match state.tablets.get_mut(&tablet_id) {
            Some(tablet) => {
                // Acknowledge receipt only; the test scripts the outcome.
                tablet.election_requests += 1;
                RunLeaderElectionResponse { error: None }
            }
            None => RunLeaderElectionResponse {
                error: Some(not_hosted(&tablet_id)),
            },
        };
        Ok(tonic::Response::new(response))
    }

    async fn leader_step_down(
        &self,
        request: tonic::Request<LeaderStepDownRequest>,
    ) -> Result<tonic::Response<LeaderStepDownResponse>, tonic::Status> {
        let tablet_id = request.into_inner().tablet_id;
        let mut state = self.state.lock();
        let uuid = state.uuid.clone();
        let response = match state.tablets.get_mut(&tablet_id) {
            Some(tablet) if tablet.consensus.leader_uuid == uuid => {
                tablet.consensus.leader_uuid = String::new();
                LeaderStepDownResponse { error: None }
            }
            Some(_) => LeaderStepDownResponse {
                error: Some(ReplicaError::new(
                    ReplicaErrorCode::IllegalState,
                    format!("replica {uuid} is not leader of tablet {tablet_id}"),
                )),
            },
            None => LeaderStepDownResponse {
                error: Some(not_hosted(&tablet_id)),
            },
        };
        Ok(tonic::Response::new(response))
    }

    async fn change_config(
        &self,
        request: tonic::Request<ChangeConfigRequest>,
    ) -> Result<tonic::Response<ChangeConfigResponse>, tonic::Status> {
        let request = request.into_inner();
        let change_type = request.change_type();
        let server = request.server.unwrap_or_default();
        let mut state = self.state.lock();
        let uuid = state.uuid.clone();

        let error = match state.tablets.get_mut(&request.tablet_id) {
            None => Some(not_hosted(&request.tablet_id)),
            Some(tablet) if tablet.consensus.leader_uuid != uuid => {
                Some(ReplicaError::new(
                    ReplicaErrorCode::NotLeader,
                    format!("config changes for tablet {} must go to the leader", request.tablet_id),
                ))
            }
            Some(tablet) => {
                let config = tablet.consensus.committed_config.get_or_insert_with(RaftConfig::default);
                let present = config.peers.iter().any(|p| p.uuid == server.uuid);
                match change_type {
                    ChangeConfigType::AddServer if present => Some(ReplicaError::new(
                        ReplicaErrorCode::AlreadyPresent,
                        format!("server {} is already in the config", server.uuid),
                    )),
                    ChangeConfigType::AddServer => {
                        config.peers.push(server);
                        config.opid_index += 1;
                        None
                    }
                    ChangeConfigType::RemoveServer if !present => Some(ReplicaError::new(
                        ReplicaErrorCode::NotPresent,
                        format!("server {} is not in the config", server.uuid),
                    )),
                    ChangeConfigType::RemoveServer => {
                        config.peers.retain(|p| p.uuid != server.uuid);
                        config.opid_index += 1;
                        None
                    }
                    ChangeConfigType::UnknownChange => Some(ReplicaError::new(
                        ReplicaErrorCode::UnknownError,
                        "unknown config change type",
                    )),
                }
            }
        };
        Ok(tonic::Response::new(ChangeConfigResponse { error }))
    }
}

#[tonic::async_trait]
impl TabletService for FakeReplica {
    async fn write(
        &self,
        request: tonic::Request<WriteRequest>,
    ) -> Result<tonic::Response<WriteResponse>, tonic::Status> {
        let request = request.into_inner();
        let mut state = self.state.lock();
        let uuid = state.uuid.clone();
        let error = match state.tablets.get_mut(&request.tablet_id) {
            None => Some(not_hosted(&request.tablet_id)),
            Some(tablet) if tablet.consensus.leader_uuid != uuid => Some(ReplicaError::new(
                ReplicaErrorCode::NotLeader,
                format!("writes for tablet {} must go to the leader", request.tablet_id),
            )),
            Some(tablet) => {
                tablet.last_op_id = OpId {
                    term: tablet.consensus.current_term,
                    index: tablet.last_op_id.index + request.rows.len() as u64,
                };
                None
            }
        };
        Ok(tonic::Response::new(WriteResponse { error }))
    }

    async fn list_tablets(
        &self,
        _request: tonic::Request<ListTabletsRequest>,
    ) -> Result<tonic::Response<ListTabletsResponse>, tonic::Status> {
        let state = self.state.lock();
        let mut tablet_ids: Vec<String> = state.tablets.keys().cloned().collect();
        tablet_ids.sort();
        Ok(tonic::Response::new(ListTabletsResponse { tablet_ids }))
    }
}

#[tonic::async_trait]
impl TabletAdminService for FakeReplica {
    async fn delete_replica(
        &self,
        request: tonic::Request<DeleteReplicaRequest>,
    ) -> Result<tonic::Response<DeleteReplicaResponse>, tonic::Status> {
        let tablet_id = request.into_inner().tablet_id;
        let mut state = self.state.lock();
        let error = match state.tablets.remove(&tablet_id) {
            Some(_) => None,
            None => Some(not_hosted(&tablet_id)),
        };
        Ok(tonic::Response::new(DeleteReplicaResponse { error }))
    }
}

/// Directory service backed by a fixed list of (uuid, port) entries.
pub struct FakeDirectory {
    pub entries: Vec<(String, u16)>,
}

#[tonic::async_trait]
impl DirectoryService for FakeDirectory {
    async fn list_servers(
        &self,
        _request: tonic::Request<ListServersRequest>,
    ) -> Result<tonic::Response<ListServersResponse>, tonic::Status> {
        let servers = self
            .entries
            .iter()
            .map(|(uuid, port)| ServerEntry {
                instance: Some(NodeInstance {
                    uuid: uuid.clone(),
                    seqno: 1,
                }),
                registration: Some(Registration {
                    rpc_addresses: vec![HostPort {
                        host: "127.0.0.1".to_string(),
                        port: *port as u32,
                    }],
                }),
            })
            .collect();
        Ok(tonic::Response::new(ListServersResponse { servers }))
    }
}

async fn serve_replica(
    fake: FakeReplica,
    rx: oneshot::Receiver<()>,
) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(ConsensusServiceServer::new(fake.clone()))
            .add_service(TabletServiceServer::new(fake.clone()))
            .add_service(TabletAdminServiceServer::new(fake))
            .serve_with_incoming_shutdown(
                tokio_stream::wrappers::TcpListenerStream::new(listener),
                async {
                    rx.await.ok();
                },
            )
            .await
            .unwrap();
    });
    port
}

async fn serve_directory(
    directory: FakeDirectory,
    rx: oneshot::Receiver<()>,
) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(DirectoryServiceServer::new(directory))
            .serve_with_incoming_shutdown(
                tokio_stream::wrappers::TcpListenerStream::new(listener),
                async {
                    rx.await.ok();
                },
            )
            .await
            .unwrap();
    });
    port
}

/// An in-process cluster: `num_peers` replicas hosting `tablet_id`
/// (the first one leader, all voters), plus spare registered servers,
/// plus a directory service listing everyone.
pub struct FakeCluster {
    pub tablet_id: String,
    pub uuids: Vec<String>,
    fakes: HashMap<String, FakeReplica>,
    shutdown_txs: HashMap<String, oneshot::Sender<()>>,
    directory_tx: Option<oneshot::Sender<()>>,
    pub directory_port: u16,
}

impl FakeCluster {
    pub async fn start(
        num_servers: usize,
        num_peers: usize,
        tablet_id: &str,
    ) -> Self {
        assert!(num_peers <= num_servers);
        let uuids: Vec<String> = (1..=num_servers).map(|i| format!("r{i}")).collect();
        let peers: Vec<RaftPeer> = uuids
            .iter()
            .take(num_peers)
            .map(|uuid| RaftPeer {
                uuid: uuid.clone(),
                member_type: MemberType::Voter.into(),
                ..Default::default()
            })
            .collect();
        let consensus = ConsensusState {
            current_term: 1,
            leader_uuid: uuids[0].clone(),
            committed_config: Some(RaftConfig {
                opid_index: 0,
                peers,
            }),
        };

        let mut fakes = HashMap::new();
        let mut shutdown_txs = HashMap::new();
        let mut entries = Vec::new();
        for (i, uuid) in uuids.iter().enumerate() {
            let fake = FakeReplica::new(uuid);
            if i < num_peers {
                fake.host_tablet(tablet_id, consensus.clone());
            }
            let (tx, rx) = oneshot::channel();
            let port = serve_replica(fake.clone(), rx).await;
            entries.push((uuid.clone(), port));
            fakes.insert(uuid.clone(), fake);
            shutdown_txs.insert(uuid.clone(), tx);
        }

        let (directory_tx, rx) = oneshot::channel();
        let directory_port = serve_directory(FakeDirectory { entries }, rx).await;

        Self {
            tablet_id: tablet_id.to_string(),
            uuids,
            fakes,
            shutdown_txs,
            directory_tx: Some(directory_tx),
            directory_port,
        }
    }

    pub async fn directory(
        &self,
        config: &HarnessConfig,
    ) -> ClusterDirectory {
        let mut client =
            DirectoryServiceClient::connect(format!("http://127.0.0.1:{}", self.directory_port))
                .await
                .expect("directory reachable");
        ClusterDirectory::build(&mut client, config)
            .await
            .expect("directory should build")
    }

    /// The in-memory state behind one replica, for scripting scenarios.
    pub fn fake(
        &self,
        uuid: &str,
    ) -> &FakeReplica {
        &self.fakes[uuid]
    }

    /// Kill one replica's server to simulate a partition. Its handle in
    /// any directory keeps pointing at the dead port.
    pub fn stop_replica(
        &mut self,
        uuid: &str,
    ) {
        if let Some(tx) = self.shutdown_txs.remove(uuid) {
            tx.send(()).expect("Should succeed to send shutdown");
        }
    }

    pub fn shutdown(mut self) {
        for (_, tx) in self.shutdown_txs.drain() {
            let _ = tx.send(());
        }
        if let Some(tx) = self.directory_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Handles of the tablet's hosting replicas, in uuid order.
pub fn peer_handles(
    directory: &ClusterDirectory,
    uuids: &[&str],
) -> Vec<Arc<ReplicaHandle>> {
    uuids
        .iter()
        .map(|uuid| {
            Arc::clone(
                directory
                    .server(uuid)
                    .unwrap_or_else(|| panic!("server {uuid} not registered")),
            )
        })
        .collect()
}
