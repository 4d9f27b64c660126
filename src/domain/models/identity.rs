use serde::Serialize;

use super::NetworkAddress;

/// Everything this machine knows about its own network identity.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub hostname: String,
    /// IPv4 addresses the hostname resolved to, in resolver order.
    pub addresses: Vec<String>,
    /// Empty when no interface carried a usable address.
    pub local_ip: String,
    pub endpoint: NetworkAddress,
}
