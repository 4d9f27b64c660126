use std::fmt;

/// Address family of a binary address that failed text conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrFamily {
    Ipv4,
    Ipv6,
    Other(i32),
}

impl fmt::Display for AddrFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddrFamily::Ipv4 => write!(f, "IPv4"),
            AddrFamily::Ipv6 => write!(f, "IPv6"),
            AddrFamily::Other(family) => write!(f, "family {family}"),
        }
    }
}

/// Errors returned by identity lookups.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// An OS-level call failed.
    #[error("{context}: {message} (code {code})")]
    Lookup {
        context: String,
        code: i32,
        message: String,
    },

    /// A binary address could not be rendered to text.
    #[error("could not convert {family} address for: {target}")]
    Conversion { family: AddrFamily, target: String },
}

impl NetError {
    pub(crate) fn lookup(context: impl Into<String>, code: i32, message: impl Into<String>) -> Self {
        NetError::Lookup {
            context: context.into(),
            code,
            message: message.into(),
        }
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, NetError::Lookup { .. })
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, NetError::Conversion { .. })
    }

    /// OS error code for lookup failures.
    pub fn code(&self) -> Option<i32> {
        match self {
            NetError::Lookup { code, .. } => Some(*code),
            NetError::Conversion { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NetError>;
