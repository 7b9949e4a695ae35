use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tonic::transport::Channel;
use tonic_health::server::health_reporter;
use tracing::debug;

use super::MockDirectoryService;
use super::MockReplicaService;
use crate::config::HarnessConfig;
use crate::directory::ReplicaHandle;
use crate::proto::common::HostPort;
use crate::proto::common::NodeInstance;
use crate::proto::common::Registration;
use crate::proto::consensus::consensus_service_server::ConsensusServiceServer;
use crate::proto::directory::directory_service_client::DirectoryServiceClient;
use crate::proto::directory::directory_service_server::DirectoryServiceServer;
use crate::proto::tablet::tablet_admin_service_server::TabletAdminServiceServer;
use crate::proto::tablet::tablet_service_server::TabletServiceServer;

pub struct MockNode;

impl MockNode {
    /// Serve one replica's three planes from canned responses on an
    /// ephemeral port. The server runs until `rx` fires.
    pub async fn mock_replica_listener(
        mock_service: MockReplicaService,
        rx: oneshot::Receiver<()>,
    ) -> (u16, SocketAddr) {
        let (mut health_reporter, health_service) = health_reporter();
        health_reporter
            .set_serving::<ConsensusServiceServer<MockReplicaService>>()
            .await;
        health_reporter
            .set_serving::<TabletServiceServer<MockReplicaService>>()
            .await;
        health_reporter
            .set_serving::<TabletAdminServiceServer<MockReplicaService>>()
            .await;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let port = addr.port();
        debug!("starting mock replica service: port={port}");

        let mock_service = Arc::new(mock_service);

        let _r = tokio::spawn(async move {
            tonic::transport::Server::builder()
                .add_service(health_service)
                .add_service(ConsensusServiceServer::from_arc(mock_service.clone()))
                .add_service(TabletServiceServer::from_arc(mock_service.clone()))
                .add_service(TabletAdminServiceServer::from_arc(mock_service))
                .serve_with_incoming_shutdown(
                    tokio_stream::wrappers::TcpListenerStream::new(listener),
                    async {
                        rx.await.ok();
                    },
                )
                .await
                .unwrap();
        });

        (port, addr)
    }

    /// Serve a canned directory service on an ephemeral port.
    pub async fn mock_directory_listener(
        mock_service: MockDirectoryService,
        rx: oneshot::Receiver<()>,
    ) -> (u16, SocketAddr) {
        let (mut health_reporter, health_service) = health_reporter();
        health_reporter
            .set_serving::<DirectoryServiceServer<MockDirectoryService>>()
            .await;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let port = addr.port();
        debug!("starting mock directory service: port={port}");

        let _r = tokio::spawn(async move {
            tonic::transport::Server::builder()
                .add_service(health_service)
                .add_service(DirectoryServiceServer::new(mock_service))
                .serve_with_incoming_shutdown(
                    tokio_stream::wrappers::TcpListenerStream::new(listener),
                    async {
                        rx.await.ok();
                    },
                )
                .await
                .unwrap();
        });

        (port, addr)
    }

    pub async fn directory_client_for_port(port: u16) -> DirectoryServiceClient<Channel> {
        DirectoryServiceClient::connect(format!("http://127.0.0.1:{port}"))
            .await
            .expect("connection failed")
    }

    /// Build a handle that targets the mock on `port`.
    pub fn replica_handle_for_port(
        uuid: &str,
        port: u16,
        config: &HarnessConfig,
    ) -> ReplicaHandle {
        let instance = NodeInstance {
            uuid: uuid.to_string(),
            seqno: 1,
        };
        let registration = Registration {
            rpc_addresses: vec![HostPort {
                host: "127.0.0.1".to_string(),
                port: port as u32,
            }],
        };
        ReplicaHandle::connect(instance, registration, config).expect("valid registration")
    }

    pub fn server_entry(
        uuid: &str,
        port: u16,
    ) -> crate::proto::directory::ServerEntry {
        crate::proto::directory::ServerEntry {
            instance: Some(NodeInstance {
                uuid: uuid.to_string(),
                seqno: 1,
            }),
            registration: Some(Registration {
                rpc_addresses: vec![HostPort {
                    host: "127.0.0.1".to_string(),
                    port: port as u32,
                }],
            }),
        }
    }
}
