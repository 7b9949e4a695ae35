use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;
use tonic::transport::Endpoint;

use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::errors::Result;
use crate::proto::common::HostPort;
use crate::proto::common::NodeInstance;
use crate::proto::common::Registration;
use crate::proto::consensus::consensus_service_client::ConsensusServiceClient;
use crate::proto::tablet::tablet_admin_service_client::TabletAdminServiceClient;
use crate::proto::tablet::tablet_service_client::TabletServiceClient;
use crate::utils::net::http_uri;

/// One discovered server: its stable identity, its advertised
/// registration, and the three RPC planes used to talk to it.
///
/// All three clients share a single lazily-connected channel to the
/// server's first advertised address, so a handle can be built for a
/// replica that is currently down; probing it reports `Unreachable`.
/// Clients are cheap to clone and safe for concurrent independent calls.
pub struct ReplicaHandle {
    pub instance: NodeInstance,
    pub registration: Registration,
    tablet: TabletServiceClient<Channel>,
    admin: TabletAdminServiceClient<Channel>,
    consensus: ConsensusServiceClient<Channel>,
}

impl ReplicaHandle {
    pub(crate) fn connect(
        instance: NodeInstance,
        registration: Registration,
        config: &HarnessConfig,
    ) -> Result<Self> {
        let addr = registration.rpc_addresses.first().ok_or_else(|| {
            HarnessError::ProtocolError(format!(
                "server {} registered no rpc address",
                instance.uuid
            ))
        })?;
        let channel = Self::channel(addr, config)?;

        let mut tablet = TabletServiceClient::new(channel.clone());
        let mut admin = TabletAdminServiceClient::new(channel.clone());
        let mut consensus = ConsensusServiceClient::new(channel);
        if config.enable_compression {
            tablet = tablet
                .send_compressed(CompressionEncoding::Gzip)
                .accept_compressed(CompressionEncoding::Gzip);
            admin = admin
                .send_compressed(CompressionEncoding::Gzip)
                .accept_compressed(CompressionEncoding::Gzip);
            consensus = consensus
                .send_compressed(CompressionEncoding::Gzip)
                .accept_compressed(CompressionEncoding::Gzip);
        }

        Ok(Self {
            instance,
            registration,
            tablet,
            admin,
            consensus,
        })
    }

    fn channel(
        addr: &HostPort,
        config: &HarnessConfig,
    ) -> Result<Channel> {
        let endpoint = Endpoint::try_from(http_uri(addr))
            .map_err(|e| {
                HarnessError::ProtocolError(format!("bad address {}:{}: {e}", addr.host, addr.port))
            })?
            .connect_timeout(config.connect_timeout())
            .tcp_keepalive(Some(config.tcp_keepalive()));
        Ok(endpoint.connect_lazy())
    }

    pub fn uuid(&self) -> &str {
        &self.instance.uuid
    }

    pub(crate) fn tablet_client(&self) -> TabletServiceClient<Channel> {
        self.tablet.clone()
    }

    pub(crate) fn admin_client(&self) -> TabletAdminServiceClient<Channel> {
        self.admin.clone()
    }

    pub(crate) fn consensus_client(&self) -> ConsensusServiceClient<Channel> {
        self.consensus.clone()
    }
}

impl std::fmt::Display for ReplicaHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.registration.rpc_addresses.first() {
            Some(addr) => write!(f, "{} ({}:{})", self.uuid(), addr.host, addr.port),
            None => write!(f, "{}", self.uuid()),
        }
    }
}
