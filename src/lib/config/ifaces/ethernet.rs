// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::net::{Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use super::{
    link_local_or_default, push_gateway_routes, validate_routes,
    validate_routing_policy,
};
use crate::config::ip::IpInterfaceAddr;
use crate::config::match_object::MatchObject;
use crate::config::nameservers::NameServers;
use crate::config::route::Route;
use crate::config::routing_policy::RoutingPolicy;
use crate::config::types::{
    EmbeddedSwitchMode, InterfaceName, LinkLocalAddressing, MacAddress, Mtu,
    VirtualFunctionCount,
};
use crate::NetplannerError;

/// Physical ethernet adapter, including its SR-IOV knobs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Ethernet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macaddress: Option<MacAddress>,
    /// Interface may be absent at boot without failing the network target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<NameServers>,
    /// Hardware selector used when the kernel-assigned name is not stable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#match: Option<MatchObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<InterfaceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf: Option<InterfaceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<Mtu>,
    /// Number of SR-IOV virtual functions to spawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_function_count: Option<VirtualFunctionCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded_switch_mode: Option<EmbeddedSwitchMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_local: Option<BTreeSet<LinkLocalAddressing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_ra: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway4: Option<Ipv4Addr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway6: Option<Ipv6Addr>,
    /// Rename the matched device to this name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<InterfaceName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<IpInterfaceAddr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routing_policy: Vec<RoutingPolicy>,
    #[serde(default)]
    pub emit_lldp: bool,
    #[serde(default)]
    pub wakeonlan: bool,
    /// Keep virtual functions unbound after spawning; a delayed rebind
    /// unit takes care of it once switchdev mode is settled.
    #[serde(default)]
    pub delay_virtual_functions_rebind: bool,
}

impl Ethernet {
    pub(crate) fn finalized(mut self) -> Result<Self, NetplannerError> {
        validate_routes(&self.routes)?;
        validate_routing_policy(&self.routing_policy)?;
        self.link_local = link_local_or_default(self.link_local.take());
        push_gateway_routes(&mut self.routes, self.gateway4, self.gateway6);
        Ok(self)
    }
}
