use std::ffi::{CStr, CString, OsString};
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ptr;

use libc::{c_char, c_int, c_void, socklen_t};

use crate::domain::config::IdentityConfig;
use crate::os::{InterfaceEntry, NetworkStack, OsError, RawAddr};

// libc exports no binding for inet_ntop, so declare the POSIX symbol here.
extern "C" {
    fn inet_ntop(af: c_int, src: *const c_void, dst: *mut c_char, size: socklen_t) -> *const c_char;
}

/// The real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemStack;

/// Owns a `getaddrinfo` result list and frees it on drop.
struct AddrInfoList {
    head: *mut libc::addrinfo,
}

impl Drop for AddrInfoList {
    fn drop(&mut self) {
        if !self.head.is_null() {
            // SAFETY: head came from a successful getaddrinfo and is freed once.
            unsafe { libc::freeaddrinfo(self.head) };
        }
    }
}

/// Walks the records of a resolver result, keeping the list alive until
/// the iterator itself is dropped.
pub struct AddrInfoIter {
    cursor: *const libc::addrinfo,
    _list: AddrInfoList,
}

impl Iterator for AddrInfoIter {
    type Item = RawAddr;

    fn next(&mut self) -> Option<RawAddr> {
        if self.cursor.is_null() {
            return None;
        }
        // SAFETY: cursor points into the list owned by `_list`.
        let record = unsafe { &*self.cursor };
        self.cursor = record.ai_next;
        // SAFETY: getaddrinfo sets ai_addr to null or an address of ai_family.
        Some(unsafe { raw_from_sockaddr(record.ai_addr) })
    }
}

/// # Safety
/// `sa` must be null or point to a socket address valid for its family.
unsafe fn raw_from_sockaddr(sa: *const libc::sockaddr) -> RawAddr {
    if sa.is_null() {
        return RawAddr::Other(libc::AF_UNSPEC);
    }
    let family = i32::from((*sa).sa_family);
    match family {
        libc::AF_INET => {
            let sin = ptr::read_unaligned(sa as *const libc::sockaddr_in);
            RawAddr::V4(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr)))
        }
        libc::AF_INET6 => {
            let sin6 = ptr::read_unaligned(sa as *const libc::sockaddr_in6);
            RawAddr::V6(Ipv6Addr::from(sin6.sin6_addr.s6_addr))
        }
        other => RawAddr::Other(other),
    }
}

fn gai_error(code: i32) -> OsError {
    if code == libc::EAI_SYSTEM {
        return io::Error::last_os_error().into();
    }
    // SAFETY: gai_strerror returns a static NUL-terminated string.
    let message = unsafe { CStr::from_ptr(libc::gai_strerror(code)) };
    OsError::new(code, message.to_string_lossy())
}

fn ntop(family: c_int, src: *const c_void, buf: &mut [c_char]) -> Option<String> {
    // SAFETY: src matches family and buf is writable for buf.len() bytes.
    let ret = unsafe { inet_ntop(family, src, buf.as_mut_ptr(), buf.len() as socklen_t) };
    if ret.is_null() {
        return None;
    }
    // SAFETY: on success inet_ntop wrote a NUL-terminated string into buf.
    let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
    Some(text.to_string_lossy().into_owned())
}

impl NetworkStack for SystemStack {
    type Resolved = AddrInfoIter;
    type Interfaces = std::vec::IntoIter<InterfaceEntry>;

    fn hostname(&self) -> Result<OsString, OsError> {
        Ok(hostname::get()?)
    }

    fn resolve_ipv4(&self, name: &str) -> Result<AddrInfoIter, OsError> {
        let c_name = CString::new(name)
            .map_err(|_| OsError::new(libc::EAI_NONAME, "name contains a NUL byte"))?;

        // SAFETY: addrinfo is plain data; all-zero is a valid hints value.
        let mut hints: libc::addrinfo = unsafe { std::mem::zeroed() };
        hints.ai_family = libc::AF_INET;
        hints.ai_socktype = libc::SOCK_STREAM;

        let mut head: *mut libc::addrinfo = ptr::null_mut();
        // SAFETY: c_name outlives the call and head is only read on success.
        let ret = unsafe { libc::getaddrinfo(c_name.as_ptr(), ptr::null(), &hints, &mut head) };
        let list = AddrInfoList { head };
        if ret != 0 {
            return Err(gai_error(ret));
        }

        Ok(AddrInfoIter {
            cursor: list.head,
            _list: list,
        })
    }

    fn interfaces(&self) -> Result<Self::Interfaces, OsError> {
        // if-addrs frees its getifaddrs list before returning
        let entries: Vec<InterfaceEntry> = if_addrs::get_if_addrs()?
            .into_iter()
            .map(|iface| InterfaceEntry {
                addr: Some(match iface.ip() {
                    IpAddr::V4(ip) => RawAddr::V4(ip),
                    IpAddr::V6(ip) => RawAddr::V6(ip),
                }),
                name: iface.name,
            })
            .collect();
        Ok(entries.into_iter())
    }

    fn addr_to_text(&self, addr: &RawAddr) -> Option<String> {
        match addr {
            RawAddr::V4(ip) => {
                let in_addr = libc::in_addr {
                    s_addr: u32::from(*ip).to_be(),
                };
                let mut buf = [0 as c_char; IdentityConfig::IPV4_TEXT_LEN];
                ntop(libc::AF_INET, &in_addr as *const _ as *const c_void, &mut buf)
            }
            RawAddr::V6(ip) => {
                let in6_addr = libc::in6_addr { s6_addr: ip.octets() };
                let mut buf = [0 as c_char; IdentityConfig::IPV6_TEXT_LEN];
                ntop(libc::AF_INET6, &in6_addr as *const _ as *const c_void, &mut buf)
            }
            RawAddr::Other(_) => None,
        }
    }
}
