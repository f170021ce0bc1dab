// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::net::{Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use super::{
    link_local_or_default, push_gateway_routes, validate_routes,
    validate_routing_policy,
};
use crate::config::ip::IpInterfaceAddr;
use crate::config::nameservers::NameServers;
use crate::config::route::Route;
use crate::config::routing_policy::RoutingPolicy;
use crate::config::types::{
    BondAdSelect, BondLacpRate, BondMode, BondTransmitHashPolicy,
    InterfaceName, LinkLocalAddressing, MacAddress, Mtu, PositiveInt,
};
use crate::NetplannerError;

fn default_mii_monitor_interval() -> PositiveInt {
    // 100ms, the kernel's customary link supervision interval.
    PositiveInt::new_unchecked(100)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct BondParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub mode: BondMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<InterfaceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmit_hash_policy: Option<BondTransmitHashPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_select: Option<BondAdSelect>,
    #[serde(default)]
    pub lacp_rate: BondLacpRate,
    #[serde(default = "default_mii_monitor_interval")]
    pub mii_monitor_interval: PositiveInt,
}

/// Link aggregation over a list of member ethernets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Bond {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macaddress: Option<MacAddress>,
    pub parameters: BondParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf: Option<InterfaceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<NameServers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<Mtu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_local: Option<BTreeSet<LinkLocalAddressing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway4: Option<Ipv4Addr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway6: Option<Ipv6Addr>,
    /// Member interfaces, referenced by name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<InterfaceName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<IpInterfaceAddr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routing_policy: Vec<RoutingPolicy>,
}

impl Bond {
    pub(crate) fn finalized(mut self) -> Result<Self, NetplannerError> {
        validate_routes(&self.routes)?;
        validate_routing_policy(&self.routing_policy)?;
        self.link_local = link_local_or_default(self.link_local.take());
        push_gateway_routes(&mut self.routes, self.gateway4, self.gateway6);
        Ok(self)
    }
}
