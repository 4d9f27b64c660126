pub mod identity;
pub mod network_address;

pub use identity::HostIdentity;
pub use network_address::NetworkAddress;
