use crate::domain::config::IdentityConfig;
use crate::domain::models::NetworkAddress;
#[cfg(unix)]
use crate::error::Result;
#[cfg(unix)]
use crate::features::identity::IdentityService;
#[cfg(unix)]
use crate::os::SystemStack;

#[cfg(unix)]
fn system() -> IdentityService<SystemStack> {
    IdentityService::new(SystemStack)
}

#[cfg(unix)]
pub fn get_hostname() -> Result<String> {
    system().get_hostname()
}

#[cfg(unix)]
pub fn hostname_to_ip_addrs(name: &str) -> Result<Vec<String>> {
    system().hostname_to_ip_addrs(name)
}

#[cfg(unix)]
pub fn get_local_ip() -> Result<String> {
    system().get_local_ip()
}

/// First address that isn't exactly `127.0.0.1`, in input order.
pub fn find_first_non_localhost<S: AsRef<str>>(addresses: &[S]) -> Option<&str> {
    addresses
        .iter()
        .map(|addr| addr.as_ref())
        .find(|addr| *addr != IdentityConfig::LOOPBACK_V4)
}

pub fn make_network_address(host: impl Into<String>, port: i32) -> NetworkAddress {
    NetworkAddress::new(host, port)
}
