//! Local network identity: hostname, forward IPv4 resolution, the local
//! interface address, and the endpoint value announced to peers.

pub mod domain;
pub mod error;
pub mod features;
pub mod os;
pub mod utils;

pub use domain::config::IdentityConfig;
pub use domain::models::{HostIdentity, NetworkAddress};
pub use error::{AddrFamily, NetError, Result};
pub use features::identity::{IdentityService, LocalScanPolicy};
pub use os::{InterfaceEntry, NetworkStack, OsError, RawAddr};
#[cfg(unix)]
pub use os::SystemStack;
pub use utils::{find_first_non_localhost, make_network_address};
#[cfg(unix)]
pub use utils::{get_hostname, get_local_ip, hostname_to_ip_addrs};
