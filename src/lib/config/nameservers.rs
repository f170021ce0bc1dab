// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetplannerError};

/// DNS search domain, validated as a relative FQDN.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Fqdn(String);

impl Fqdn {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl std::convert::TryFrom<String> for Fqdn {
    type Error = NetplannerError;

    fn try_from(value: String) -> Result<Self, NetplannerError> {
        // Stored relative, a single trailing dot is accepted and dropped.
        let relative = value.strip_suffix('.').unwrap_or(value.as_str());
        if relative.is_empty()
            || relative.len() > 253
            || !relative.split('.').all(is_valid_label)
        {
            return Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!("Invalid FQDN '{value}'"),
            ));
        }
        Ok(Self(relative.to_string()))
    }
}

impl std::convert::From<Fqdn> for String {
    fn from(v: Fqdn) -> Self {
        v.0
    }
}

impl std::fmt::Display for Fqdn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolver configuration shared by most interface kinds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct NameServers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search: Vec<Fqdn>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<IpAddr>,
}
