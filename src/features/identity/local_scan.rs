use crate::domain::config::IdentityConfig;
use crate::error::{NetError, Result};
use crate::os::{InterfaceEntry, NetworkStack, RawAddr};

/// How the interface scan picks between IPv4 and IPv6 entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocalScanPolicy {
    /// Whichever qualifying entry comes first in enumeration order wins.
    /// IPv6 entries qualify unconditionally, `::1` included.
    #[default]
    FirstMatch,
    /// A non-loopback IPv4 entry anywhere in the list wins; otherwise the
    /// first IPv6 entry.
    PreferIpv4,
}

/// What a single interface entry contributes to the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Candidate {
    NoAddress,
    Ipv4Loopback,
    Ipv4(String),
    /// Accepted without a loopback check.
    Ipv6(String),
    UnsupportedFamily,
}

pub(crate) fn classify<S: NetworkStack>(stack: &S, entry: &InterfaceEntry) -> Result<Candidate> {
    let Some(addr) = entry.addr else {
        return Ok(Candidate::NoAddress);
    };
    let to_text = |addr: &RawAddr| {
        stack.addr_to_text(addr).ok_or_else(|| NetError::Conversion {
            family: addr.family(),
            target: entry.name.clone(),
        })
    };

    match addr {
        RawAddr::V4(_) => {
            let text = to_text(&addr)?;
            if text == IdentityConfig::LOOPBACK_V4 {
                Ok(Candidate::Ipv4Loopback)
            } else {
                Ok(Candidate::Ipv4(text))
            }
        }
        RawAddr::V6(_) => Ok(Candidate::Ipv6(to_text(&addr)?)),
        RawAddr::Other(_) => Ok(Candidate::UnsupportedFamily),
    }
}

/// Walk the interface entries and pick the local address. Returns an
/// empty string when nothing qualifies.
pub(crate) fn scan<S, I>(stack: &S, entries: I, policy: LocalScanPolicy) -> Result<String>
where
    S: NetworkStack,
    I: Iterator<Item = InterfaceEntry>,
{
    let mut ipv6_fallback: Option<String> = None;

    for entry in entries {
        match classify(stack, &entry)? {
            Candidate::Ipv4(text) => {
                log::debug!("Local address {} from interface {}", text, entry.name);
                return Ok(text);
            }
            Candidate::Ipv6(text) => match policy {
                LocalScanPolicy::FirstMatch => {
                    log::debug!("Local address {} from interface {}", text, entry.name);
                    return Ok(text);
                }
                LocalScanPolicy::PreferIpv4 => {
                    ipv6_fallback.get_or_insert(text);
                }
            },
            Candidate::NoAddress | Candidate::Ipv4Loopback | Candidate::UnsupportedFamily => {}
        }
    }

    Ok(ipv6_fallback.unwrap_or_default())
}
