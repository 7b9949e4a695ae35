use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tonic::transport::Channel;
use tracing::debug;

use super::ReplicaHandle;
use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::errors::Result;
use crate::proto::directory::directory_service_client::DirectoryServiceClient;
use crate::proto::directory::ListServersRequest;
use crate::proto::tablet::ListTabletsRequest;
use crate::utils::rpc::bounded;

/// Owning map of every discovered server plus the tablet-to-replica
/// placement, built once from the central directory service.
///
/// Reads are safe to share across test tasks; all mutation goes through
/// `&mut self` and is serialized by the caller. The directory never
/// refreshes itself: placement changes only when a test asks for them.
pub struct ClusterDirectory {
    servers: HashMap<String, Arc<ReplicaHandle>>,
    tablet_replicas: HashMap<String, Vec<Arc<ReplicaHandle>>>,
}

impl ClusterDirectory {
    /// Interrogate the directory service once and build a handle for
    /// every registered server. Placement is not yet known afterwards;
    /// see [`ClusterDirectory::refresh_placement`].
    pub async fn build(
        directory: &mut DirectoryServiceClient<Channel>,
        config: &HarnessConfig,
    ) -> Result<Self> {
        let response = bounded(
            "directory ListServers".to_string(),
            config.rpc_timeout(),
            directory.list_servers(ListServersRequest {}),
        )
        .await?;

        let mut servers = HashMap::new();
        for entry in response.servers {
            let instance = entry.instance.ok_or_else(|| {
                HarnessError::ProtocolError("server entry without instance id".to_string())
            })?;
            let registration = entry.registration.ok_or_else(|| {
                HarnessError::ProtocolError(format!(
                    "server {} listed without registration",
                    instance.uuid
                ))
            })?;
            debug!(uuid = %instance.uuid, "discovered server");
            let handle = ReplicaHandle::connect(instance, registration, config)?;
            servers.insert(handle.uuid().to_string(), Arc::new(handle));
        }

        Ok(Self {
            servers,
            tablet_replicas: HashMap::new(),
        })
    }

    pub fn server(&self, uuid: &str) -> Option<&Arc<ReplicaHandle>> {
        self.servers.get(uuid)
    }

    pub fn servers(&self) -> impl Iterator<Item = &Arc<ReplicaHandle>> {
        self.servers.values()
    }

    pub fn num_servers(&self) -> usize {
        self.servers.len()
    }

    /// Replicas hosting `tablet_id`. Unknown ids yield an empty set:
    /// tests may look up a tablet before its placement is known.
    pub fn lookup_tablet(&self, tablet_id: &str) -> Vec<Arc<ReplicaHandle>> {
        self.tablet_replicas.get(tablet_id).cloned().unwrap_or_default()
    }

    /// Ask every registered server which tablets it hosts and rebuild
    /// the placement map from the answers. Runs only when called.
    pub async fn refresh_placement(
        &mut self,
        rpc_timeout: Duration,
    ) -> Result<()> {
        let mut tablet_replicas: HashMap<String, Vec<Arc<ReplicaHandle>>> = HashMap::new();
        for handle in self.servers.values() {
            let mut client = handle.tablet_client();
            let response = bounded(
                format!("{handle} ListTablets"),
                rpc_timeout,
                client.list_tablets(ListTabletsRequest {}),
            )
            .await?;
            for tablet_id in response.tablet_ids {
                debug!(uuid = %handle.uuid(), %tablet_id, "hosted tablet");
                tablet_replicas
                    .entry(tablet_id)
                    .or_default()
                    .push(Arc::clone(handle));
            }
        }
        self.tablet_replicas = tablet_replicas;
        Ok(())
    }

    /// Record that the server `uuid` now hosts `tablet_id`. Tests drive
    /// this by hand after a successful membership change.
    pub fn add_tablet_replica(
        &mut self,
        tablet_id: &str,
        uuid: &str,
    ) -> Result<()> {
        let handle = self
            .servers
            .get(uuid)
            .ok_or_else(|| HarnessError::NotFound(format!("no registered server {uuid}")))?;
        let replicas = self.tablet_replicas.entry(tablet_id.to_string()).or_default();
        if !replicas.iter().any(|r| r.uuid() == uuid) {
            replicas.push(Arc::clone(handle));
        }
        Ok(())
    }

    /// Forget that the server `uuid` hosts `tablet_id`.
    pub fn remove_tablet_replica(
        &mut self,
        tablet_id: &str,
        uuid: &str,
    ) {
        if let Some(replicas) = self.tablet_replicas.get_mut(tablet_id) {
            replicas.retain(|r| r.uuid() != uuid);
            if replicas.is_empty() {
                self.tablet_replicas.remove(tablet_id);
            }
        }
    }
}
