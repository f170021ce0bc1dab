// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetplannerError};

/// Kernel network interface name, at most 15 bytes of ASCII.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct InterfaceName(String);

impl InterfaceName {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::convert::TryFrom<String> for InterfaceName {
    type Error = NetplannerError;

    fn try_from(value: String) -> Result<Self, NetplannerError> {
        if value.len() > 15 || !value.is_ascii() {
            Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!(
                    "InterfaceName {} of len {} not supported in Linux",
                    value,
                    value.len()
                ),
            ))
        } else {
            Ok(Self(value))
        }
    }
}

impl std::convert::From<InterfaceName> for String {
    fn from(v: InterfaceName) -> Self {
        v.0
    }
}

impl std::str::FromStr for InterfaceName {
    type Err = NetplannerError;

    fn from_str(s: &str) -> Result<Self, NetplannerError> {
        Self::try_from(s.to_string())
    }
}

impl std::fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for InterfaceName {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

/// MAC address: exactly six lower case hex octets separated by `:`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn octets(&self) -> [u8; 6] {
        let mut ret = [0u8; 6];
        for (i, group) in self.0.split(':').enumerate() {
            // Groups are validated on construction.
            ret[i] = u8::from_str_radix(group, 16).unwrap_or_default();
        }
        ret
    }

    pub fn from_octets(octets: [u8; 6]) -> Self {
        Self(
            octets
                .iter()
                .map(|o| format!("{o:02x}"))
                .collect::<Vec<String>>()
                .join(":"),
        )
    }
}

impl std::convert::TryFrom<String> for MacAddress {
    type Error = NetplannerError;

    fn try_from(value: String) -> Result<Self, NetplannerError> {
        if value.len() != 17 {
            return Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!(
                    "MacAddress {} of len {} not supported in Linux",
                    value,
                    value.len()
                ),
            ));
        }
        let groups: Vec<&str> = value.split(':').collect();
        if groups.len() != 6 {
            return Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!("MacAddress {value} has not enough : or too many"),
            ));
        }
        for group in groups {
            if group.len() != 2
                || !group
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!("MacAddress {value} malformed"),
                ));
            }
        }
        Ok(Self(value))
    }
}

impl std::convert::From<MacAddress> for String {
    fn from(v: MacAddress) -> Self {
        v.0
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum transmission unit, IPv6 minimum up to jumbo frame.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(try_from = "u64", into = "u64")]
pub struct Mtu(u32);

impl Mtu {
    pub const MIN: u64 = 1280;
    pub const MAX: u64 = 9166;

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::convert::TryFrom<u64> for Mtu {
    type Error = NetplannerError;

    fn try_from(value: u64) -> Result<Self, NetplannerError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!(
                    "MTUBytes={value} not in {}(ipv6 minimum) - {}",
                    Self::MIN,
                    Self::MAX
                ),
            ))
        } else {
            Ok(Self(value as u32))
        }
    }
}

impl std::convert::From<Mtu> for u64 {
    fn from(v: Mtu) -> Self {
        u64::from(v.0)
    }
}

impl std::fmt::Display for Mtu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strictly positive integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct PositiveInt(u64);

impl PositiveInt {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Caller guarantees value > 0; for compile-time defaults only.
    pub(crate) const fn new_unchecked(value: u64) -> Self {
        Self(value)
    }
}

impl std::convert::TryFrom<i64> for PositiveInt {
    type Error = NetplannerError;

    fn try_from(value: i64) -> Result<Self, NetplannerError> {
        if value <= 0 {
            Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!("PositiveInteger={value} <= 0"),
            ))
        } else {
            Ok(Self(value as u64))
        }
    }
}

impl std::convert::From<PositiveInt> for i64 {
    fn from(v: PositiveInt) -> Self {
        v.0 as i64
    }
}

impl std::fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positive integer no larger than 255.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct UnsignedShortInt(u8);

impl UnsignedShortInt {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::convert::TryFrom<i64> for UnsignedShortInt {
    type Error = NetplannerError;

    fn try_from(value: i64) -> Result<Self, NetplannerError> {
        let value = PositiveInt::try_from(value)?.value();
        if value > 255 {
            Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!("UnsignedShortInt={value} > 255"),
            ))
        } else {
            Ok(Self(value as u8))
        }
    }
}

impl std::convert::From<UnsignedShortInt> for i64 {
    fn from(v: UnsignedShortInt) -> Self {
        i64::from(v.0)
    }
}

impl std::fmt::Display for UnsignedShortInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Routing table number. On top of the [UnsignedShortInt] range check the
/// kernel reserved tables (0 unspec, 253 default, 254 main, 255 local) are
/// rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct TableShortInt(u8);

impl TableShortInt {
    pub const RESERVED: [(u8, &'static str); 4] =
        [(0, "unspec"), (253, "default"), (254, "main"), (255, "local")];

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::convert::TryFrom<i64> for TableShortInt {
    type Error = NetplannerError;

    fn try_from(value: i64) -> Result<Self, NetplannerError> {
        if let Some((table, name)) = Self::RESERVED
            .iter()
            .find(|(table, _)| i64::from(*table) == value)
        {
            return Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!("Table={table} is reserved for '{name}'"),
            ));
        }
        Ok(Self(UnsignedShortInt::try_from(value)?.value()))
    }
}

impl std::convert::From<TableShortInt> for i64 {
    fn from(v: TableShortInt) -> Self {
        i64::from(v.0)
    }
}

impl std::fmt::Display for TableShortInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 802.1Q VLAN id. 2-4094, with 0 passing through as the legacy "no VLAN"
/// sentinel used by bridge default port ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct VlanId(u16);

impl VlanId {
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The sentinel 0 means "unset" at legacy call sites.
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl std::convert::TryFrom<i64> for VlanId {
    type Error = NetplannerError;

    fn try_from(value: i64) -> Result<Self, NetplannerError> {
        if value != 0 && !(2..=4094).contains(&value) {
            Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!("VLAN Id={value} not in 2 - 4094"),
            ))
        } else {
            Ok(Self(value as u16))
        }
    }
}

impl std::convert::From<VlanId> for i64 {
    fn from(v: VlanId) -> Self {
        i64::from(v.0)
    }
}

impl std::fmt::Display for VlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of SR-IOV virtual functions to spawn on a physical function.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct VirtualFunctionCount(u16);

impl VirtualFunctionCount {
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl std::convert::TryFrom<i64> for VirtualFunctionCount {
    type Error = NetplannerError;

    fn try_from(value: i64) -> Result<Self, NetplannerError> {
        if !(0..=255).contains(&value) {
            Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!("VirtualFunctionCount={value} not in 0 - 255"),
            ))
        } else {
            Ok(Self(value as u16))
        }
    }
}

impl std::convert::From<VirtualFunctionCount> for i64 {
    fn from(v: VirtualFunctionCount) -> Self {
        i64::from(v.0)
    }
}

impl std::fmt::Display for VirtualFunctionCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which address families receive link-local addresses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LinkLocalAddressing {
    Ipv4,
    Ipv6,
}

impl LinkLocalAddressing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

impl std::fmt::Display for LinkLocalAddressing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schema version of the configuration document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u64", into = "u64")]
pub enum Version {
    Second,
    Third,
}

impl std::convert::TryFrom<u64> for Version {
    type Error = NetplannerError;

    fn try_from(value: u64) -> Result<Self, NetplannerError> {
        match value {
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            _ => Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!("Version={value} not in [2, 3]"),
            )),
        }
    }
}

impl std::convert::From<Version> for u64 {
    fn from(v: Version) -> Self {
        match v {
            Version::Second => 2,
            Version::Third => 3,
        }
    }
}

/// Backing network management daemon. Only systemd-networkd is supported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NetworkRenderer {
    #[default]
    Networkd,
}

impl std::fmt::Display for NetworkRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "networkd")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondMode {
    #[serde(rename = "active-backup")]
    ActiveBackup,
    #[serde(rename = "balance-rr")]
    BalanceRoundRobin,
    // Historical wire value, underscore is intentional.
    #[serde(rename = "balance_xor")]
    BalanceXor,
    #[serde(rename = "balance-tlb")]
    BalanceTlb,
    #[serde(rename = "balance-alb")]
    BalanceAlb,
    #[serde(rename = "broadcast")]
    Broadcast,
    #[serde(rename = "802.3ad")]
    Lacp,
}

impl BondMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActiveBackup => "active-backup",
            Self::BalanceRoundRobin => "balance-rr",
            Self::BalanceXor => "balance-xor",
            Self::BalanceTlb => "balance-tlb",
            Self::BalanceAlb => "balance-alb",
            Self::Broadcast => "broadcast",
            Self::Lacp => "802.3ad",
        }
    }
}

impl std::fmt::Display for BondMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondAdSelect {
    Stable,
    Bandwidth,
    Count,
}

impl BondAdSelect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Bandwidth => "bandwidth",
            Self::Count => "count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondTransmitHashPolicy {
    #[serde(rename = "layer2")]
    Layer2,
    #[serde(rename = "layer2+3")]
    Layer23,
    #[serde(rename = "layer3+4")]
    Layer34,
    #[serde(rename = "encap2+3")]
    Encap23,
    #[serde(rename = "encap3+4")]
    Encap34,
}

impl BondTransmitHashPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Layer2 => "layer2",
            Self::Layer23 => "layer2+3",
            Self::Layer34 => "layer3+4",
            Self::Encap23 => "encap2+3",
            Self::Encap34 => "encap3+4",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BondLacpRate {
    Slow,
    #[default]
    Fast,
}

impl BondLacpRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Fast => "fast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Unreachable,
    Blackhole,
    Prohibit,
    Unicast,
}

impl RouteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unreachable => "unreachable",
            Self::Blackhole => "blackhole",
            Self::Prohibit => "prohibit",
            Self::Unicast => "unicast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteScope {
    Global,
    Link,
    Host,
}

impl RouteScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Link => "link",
            Self::Host => "host",
        }
    }
}

///// Adapter firmware mode for SR-IOV traffic steering: in-kernel (legacy)
/// or offloaded (switchdev).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddedSwitchMode {
    Legacy,
    Switchdev,
}

impl EmbeddedSwitchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Switchdev => "switchdev",
        }
    }
}

impl std::fmt::Display for EmbeddedSwitchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VlanProtocol {
    /// Deserialize and serialize from/to `802.1q`.
    #[serde(rename = "802.1q")]
    Ieee8021Q,
    /// Deserialize and serialize from/to `802.1ad`.
    #[serde(rename = "802.1ad")]
    Ieee8021Ad,
}

impl VlanProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ieee8021Q => "802.1q",
            Self::Ieee8021Ad => "802.1ad",
        }
    }
}

impl std::fmt::Display for VlanProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
