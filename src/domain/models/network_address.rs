use std::fmt;

use serde::{Deserialize, Serialize};

/// A host identifier (hostname or IP text) paired with a service port.
///
/// The port is carried as a plain `i32`, the way RPC target descriptors
/// store it. Neither field is validated here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkAddress {
    pub hostname: String,
    pub port: i32,
}

impl NetworkAddress {
    pub fn new(hostname: impl Into<String>, port: i32) -> Self {
        Self {
            hostname: hostname.into(),
            port,
        }
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hostname, self.port)
    }
}
