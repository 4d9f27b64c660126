#[cfg(unix)]
mod unix;
#[cfg(test)]
pub(crate) mod fake;

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::AddrFamily;

#[cfg(unix)]
pub use unix::SystemStack;

/// A binary socket address as handed back by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawAddr {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
    /// Any family other than IPv4/IPv6, by raw family number.
    Other(i32),
}

impl RawAddr {
    pub fn family(&self) -> AddrFamily {
        match self {
            RawAddr::V4(_) => AddrFamily::Ipv4,
            RawAddr::V6(_) => AddrFamily::Ipv6,
            RawAddr::Other(family) => AddrFamily::Other(*family),
        }
    }
}

/// One entry of the interface list. `addr` is `None` when the interface
/// has no address structure attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    pub name: String,
    pub addr: Option<RawAddr>,
}

/// Failure reported by an OS call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsError {
    pub code: i32,
    pub message: String,
}

impl OsError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<io::Error> for OsError {
    fn from(err: io::Error) -> Self {
        Self::new(err.raw_os_error().unwrap_or(0), err.to_string())
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

/// The OS queries identity resolution is built from.
///
/// `Resolved` and `Interfaces` own the OS-allocated list they walk and
/// release it exactly once when dropped, whether iteration finished or
/// the caller bailed out early.
pub trait NetworkStack {
    type Resolved: Iterator<Item = RawAddr>;
    type Interfaces: Iterator<Item = InterfaceEntry>;

    fn hostname(&self) -> Result<OsString, OsError>;

    /// Forward resolution restricted to IPv4, stream-socket hint.
    fn resolve_ipv4(&self, name: &str) -> Result<Self::Resolved, OsError>;

    /// Every interface address, in enumeration order, up or down.
    fn interfaces(&self) -> Result<Self::Interfaces, OsError>;

    /// Render a binary address as text; `None` if the OS can't.
    fn addr_to_text(&self, addr: &RawAddr) -> Option<String>;
}
