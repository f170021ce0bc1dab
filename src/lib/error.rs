// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Please report this as bug to upstream
    Bug,
    /// A scalar or entity invariant was violated: out-of-range value,
    /// malformed address, broken veth pairing and the like.
    ValidationError,
    /// Unknown field, missing required field or type mismatch while
    /// decoding a document.
    SchemaError,
    /// Topology resolution found more than one structural parent for
    /// an interface.
    LookupAmbiguity,
    /// File or directory unreadable or unwritable.
    IoError,
    /// Invalid argument
    InvalidArgument,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::ValidationError => "validation-error",
            Self::SchemaError => "schema-error",
            Self::LookupAmbiguity => "lookup-ambiguity",
            Self::IoError => "io-error",
            Self::InvalidArgument => "invalid-argument",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Try not implement From for NetplannerError here unless you are sure this
// error should always convert to certain type of ErrorKind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NetplannerError {
    pub kind: ErrorKind,
    pub msg: String,
}

impl std::fmt::Display for NetplannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl NetplannerError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }

    /// Prefix the message with the dotted document path leading to the
    /// offending field, e.g. `network.ethernets.eth0`.
    pub(crate) fn at_path(self, path: &str) -> Self {
        Self {
            kind: self.kind,
            msg: format!("{}: {}", path, self.msg),
        }
    }
}

impl std::error::Error for NetplannerError {}

impl From<serde_json::Error> for NetplannerError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::SchemaError, format!("{e}"))
    }
}

impl From<serde_yaml::Error> for NetplannerError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::new(ErrorKind::SchemaError, format!("Invalid YAML: {e}"))
    }
}

impl From<std::io::Error> for NetplannerError {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::IoError, format!("{e}"))
    }
}

impl From<std::net::AddrParseError> for NetplannerError {
    fn from(e: std::net::AddrParseError) -> Self {
        Self::new(
            ErrorKind::ValidationError,
            format!("Invalid IP address: {e}"),
        )
    }
}
