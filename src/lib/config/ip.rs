// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetplannerError};

const IPV4_ADDR_LEN: u8 = 32;
const IPV6_ADDR_LEN: u8 = 128;

fn parse_addr_prefix(value: &str) -> Result<(IpAddr, u8), NetplannerError> {
    let mut split = value.split('/');
    let addr_str = split.next().unwrap_or_default();
    let addr: IpAddr = addr_str.parse().map_err(|e| {
        NetplannerError::new(
            ErrorKind::ValidationError,
            format!("Invalid IP address '{addr_str}': {e}"),
        )
    })?;
    let max_prefix = if addr.is_ipv6() {
        IPV6_ADDR_LEN
    } else {
        IPV4_ADDR_LEN
    };
    let prefix = match split.next() {
        Some(prefix_str) => {
            let prefix = prefix_str.parse::<u8>().map_err(|e| {
                NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!("Invalid prefix length '{prefix_str}': {e}"),
                )
            })?;
            if prefix > max_prefix {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!(
                        "Prefix length {prefix} of '{value}' \
                         exceeds maximum {max_prefix}"
                    ),
                ));
            }
            prefix
        }
        None => max_prefix,
    };
    if split.next().is_some() {
        return Err(NetplannerError::new(
            ErrorKind::ValidationError,
            format!("Invalid IP network or address '{value}'"),
        ));
    }
    Ok((addr, prefix))
}

fn network_addr(addr: IpAddr, prefix: u8) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => {
            let mask = if prefix == 0 {
                0
            } else {
                u32::MAX << (IPV4_ADDR_LEN - prefix)
            };
            IpAddr::V4((u32::from(v4) & mask).into())
        }
        IpAddr::V6(v6) => {
            let mask = if prefix == 0 {
                0
            } else {
                u128::MAX << (IPV6_ADDR_LEN - prefix)
            };
            IpAddr::V6((u128::from(v6) & mask).into())
        }
    }
}

/// Interface address in `addr/prefix` form, host bits kept. A bare address
/// gets the host prefix (/32 or /128) appended. Stored in canonical string
/// form so encoding round-trips byte for byte.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct IpInterfaceAddr(String);

impl IpInterfaceAddr {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn addr(&self) -> IpAddr {
        // Validated on construction.
        self.0
            .split('/')
            .next()
            .unwrap_or_default()
            .parse()
            .unwrap_or(IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED))
    }

    pub fn prefix(&self) -> u8 {
        self.0
            .split('/')
            .nth(1)
            .and_then(|p| p.parse().ok())
            .unwrap_or_default()
    }
}

impl std::convert::TryFrom<String> for IpInterfaceAddr {
    type Error = NetplannerError;

    fn try_from(value: String) -> Result<Self, NetplannerError> {
        let (addr, prefix) = parse_addr_prefix(&value)?;
        Ok(Self(format!("{addr}/{prefix}")))
    }
}

impl std::convert::From<IpInterfaceAddr> for String {
    fn from(v: IpInterfaceAddr) -> Self {
        v.0
    }
}

impl std::fmt::Display for IpInterfaceAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network prefix in `network/prefix` form. Unlike [IpInterfaceAddr] the
/// address part must be the network address: host bits set are rejected
/// rather than silently zeroed.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct IpNetworkAddr(String);

impl IpNetworkAddr {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::convert::TryFrom<String> for IpNetworkAddr {
    type Error = NetplannerError;

    fn try_from(value: String) -> Result<Self, NetplannerError> {
        let (addr, prefix) = parse_addr_prefix(&value)?;
        let network = network_addr(addr, prefix);
        if network != addr {
            return Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!(
                    "'{value}' has host bits set, expecting network \
                     address '{network}/{prefix}'"
                ),
            ));
        }
        Ok(Self(format!("{network}/{prefix}")))
    }
}

impl std::convert::From<IpNetworkAddr> for String {
    fn from(v: IpNetworkAddr) -> Self {
        v.0
    }
}

impl std::fmt::Display for IpNetworkAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
