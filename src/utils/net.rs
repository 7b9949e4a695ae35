use crate::proto::common::HostPort;

/// Render an advertised address as a tonic-dialable http URI.
pub(crate) fn http_uri(addr: &HostPort) -> String {
    format!("http://{}:{}", addr.host, addr.port)
}
