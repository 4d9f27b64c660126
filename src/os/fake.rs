//! In-memory `NetworkStack` that counts list acquire/release.

use std::cell::Cell;
use std::ffi::OsString;
use std::rc::Rc;

use crate::os::{InterfaceEntry, NetworkStack, OsError, RawAddr};

#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub acquired: Cell<usize>,
    pub released: Cell<usize>,
}

impl Counters {
    pub fn balanced(&self) -> bool {
        self.acquired.get() == self.released.get()
    }
}

pub(crate) struct FakeList<T> {
    items: std::vec::IntoIter<T>,
    counters: Rc<Counters>,
}

impl<T> FakeList<T> {
    fn acquire(items: Vec<T>, counters: &Rc<Counters>) -> Self {
        counters.acquired.set(counters.acquired.get() + 1);
        Self {
            items: items.into_iter(),
            counters: Rc::clone(counters),
        }
    }
}

impl<T> Iterator for FakeList<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }
}

impl<T> Drop for FakeList<T> {
    fn drop(&mut self) {
        self.counters.released.set(self.counters.released.get() + 1);
    }
}

#[derive(Default)]
pub(crate) struct FakeStack {
    pub hostname: Option<String>,
    pub records: Option<Vec<RawAddr>>,
    pub interfaces: Option<Vec<InterfaceEntry>>,
    /// Addresses whose text conversion fails.
    pub unconvertible: Vec<RawAddr>,
    pub resolver_lists: Rc<Counters>,
    pub interface_lists: Rc<Counters>,
}

pub(crate) const EAI_NONAME: i32 = -2;
pub(crate) const EACCES: i32 = 13;

impl FakeStack {
    pub fn with_hostname(mut self, name: &str) -> Self {
        self.hostname = Some(name.to_string());
        self
    }

    pub fn with_records(mut self, records: Vec<RawAddr>) -> Self {
        self.records = Some(records);
        self
    }

    pub fn with_interfaces(mut self, entries: Vec<InterfaceEntry>) -> Self {
        self.interfaces = Some(entries);
        self
    }

    pub fn failing_conversion(mut self, addr: RawAddr) -> Self {
        self.unconvertible.push(addr);
        self
    }
}

pub(crate) fn iface(name: &str, addr: Option<RawAddr>) -> InterfaceEntry {
    InterfaceEntry {
        name: name.to_string(),
        addr,
    }
}

pub(crate) fn v4(text: &str) -> RawAddr {
    RawAddr::V4(text.parse().unwrap())
}

pub(crate) fn v6(text: &str) -> RawAddr {
    RawAddr::V6(text.parse().unwrap())
}

impl NetworkStack for FakeStack {
    type Resolved = FakeList<RawAddr>;
    type Interfaces = FakeList<InterfaceEntry>;

    fn hostname(&self) -> Result<OsString, OsError> {
        self.hostname
            .clone()
            .map(OsString::from)
            .ok_or_else(|| OsError::new(EACCES, "Permission denied"))
    }

    fn resolve_ipv4(&self, _name: &str) -> Result<Self::Resolved, OsError> {
        match &self.records {
            Some(records) => Ok(FakeList::acquire(records.clone(), &self.resolver_lists)),
            None => Err(OsError::new(EAI_NONAME, "Name or service not known")),
        }
    }

    fn interfaces(&self) -> Result<Self::Interfaces, OsError> {
        match &self.interfaces {
            Some(entries) => Ok(FakeList::acquire(entries.clone(), &self.interface_lists)),
            None => Err(OsError::new(EACCES, "Permission denied")),
        }
    }

    fn addr_to_text(&self, addr: &RawAddr) -> Option<String> {
        if self.unconvertible.contains(addr) {
            return None;
        }
        match addr {
            RawAddr::V4(ip) => Some(ip.to_string()),
            RawAddr::V6(ip) => Some(ip.to_string()),
            RawAddr::Other(_) => None,
        }
    }
}
