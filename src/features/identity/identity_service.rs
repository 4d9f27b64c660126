use crate::domain::models::{HostIdentity, NetworkAddress};
use crate::error::{NetError, Result};
use crate::features::identity::local_scan::{self, LocalScanPolicy};
use crate::os::NetworkStack;
use crate::utils::{find_first_non_localhost, make_network_address};

/// Resolves this machine's hostname, addresses and announce endpoint
/// against a `NetworkStack`.
pub struct IdentityService<S> {
    stack: S,
    policy: LocalScanPolicy,
}

impl<S: NetworkStack> IdentityService<S> {
    pub fn new(stack: S) -> Self {
        Self {
            stack,
            policy: LocalScanPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LocalScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> LocalScanPolicy {
        self.policy
    }

    /// Queries the OS for the configured hostname. Not cached.
    pub fn get_hostname(&self) -> Result<String> {
        let name = self
            .stack
            .hostname()
            .map_err(|e| NetError::lookup("Could not get hostname", e.code, e.message))?;
        Ok(name.to_string_lossy().into_owned())
    }

    /// Forward-resolves `name` to IPv4 addresses in resolver order.
    ///
    /// A successful lookup with no records gives an empty list. The first
    /// record that fails text conversion aborts the whole call.
    pub fn hostname_to_ip_addrs(&self, name: &str) -> Result<Vec<String>> {
        let records = self.stack.resolve_ipv4(name).map_err(|e| {
            NetError::lookup(format!("Could not find IPv4 address for: {name}"), e.code, e.message)
        })?;

        let mut addresses = Vec::new();
        for record in records {
            let text = self.stack.addr_to_text(&record).ok_or_else(|| NetError::Conversion {
                family: record.family(),
                target: name.to_string(),
            })?;
            addresses.push(text);
        }

        log::debug!("Resolved {} to {:?}", name, addresses);
        Ok(addresses)
    }

    /// Picks a local address straight from the interface list, bypassing
    /// DNS. An empty string means enumeration worked but nothing qualified.
    pub fn get_local_ip(&self) -> Result<String> {
        let entries = self
            .stack
            .interfaces()
            .map_err(|e| NetError::lookup("getifaddrs failed", e.code, e.message))?;
        local_scan::scan(&self.stack, entries, self.policy)
    }

    /// Hostname, its addresses, the interface address, and the endpoint
    /// this machine should announce on `port`.
    pub fn resolve_identity(&self, port: i32) -> Result<HostIdentity> {
        let hostname = self.get_hostname()?;

        let addresses = match self.hostname_to_ip_addrs(&hostname) {
            Ok(addresses) => addresses,
            Err(e @ NetError::Lookup { .. }) => {
                log::warn!("{}; falling back to interface scan", e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let local_ip = self.get_local_ip()?;

        let host = match find_first_non_localhost(&addresses) {
            Some(addr) => addr.to_string(),
            None if !local_ip.is_empty() => local_ip.clone(),
            None => {
                log::warn!("No usable address for {}; announcing hostname", hostname);
                hostname.clone()
            }
        };

        Ok(HostIdentity {
            endpoint: make_network_address(host, port),
            hostname,
            addresses,
            local_ip,
        })
    }

    pub fn announce_address(&self, port: i32) -> Result<NetworkAddress> {
        self.resolve_identity(port).map(|identity| identity.endpoint)
    }
}
