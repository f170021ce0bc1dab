// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    link_local_or_default, validate_routes, validate_routing_policy,
};
use crate::config::ip::IpInterfaceAddr;
use crate::config::nameservers::NameServers;
use crate::config::route::Route;
use crate::config::routing_policy::RoutingPolicy;
use crate::config::types::{
    InterfaceName, LinkLocalAddressing, MacAddress, Mtu, VlanId, VlanProtocol,
};
use crate::{ErrorKind, NetplannerError};

fn default_stp() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct BridgeParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Seconds a learned MAC is kept in the forwarding database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ageing_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_protocol: Option<VlanProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_filtering: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_vlan_port_id: Option<VlanId>,
    /// STP bridge priority, 0 - 65535.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// STP port priority, 0 - 63.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hello_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_cost: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multicast_snooping: Option<bool>,
    #[serde(default = "default_stp")]
    pub stp: bool,
}

impl BridgeParameters {
    pub fn validate(&self) -> Result<(), NetplannerError> {
        if let Some(priority) = self.priority {
            if priority > 65535 {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!(
                        "BridgeParameters Priority {priority} not in 0 - 65535"
                    ),
                ));
            }
        }
        if let Some(port_priority) = self.port_priority {
            if port_priority > 63 {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!(
                        "BridgeParameters Port Priority {port_priority} \
                         not in 0 - 63"
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Linux kernel bridge over a list of member interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Bridge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: BridgeParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<NameServers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf: Option<InterfaceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<Mtu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macaddress: Option<MacAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_local: Option<BTreeSet<LinkLocalAddressing>>,
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

impl Bridge {
    pub(crate) fn finalized(mut self) -> Result<Self, NetplannerError> {
        self.parameters.validate()?;
        validate_routes(&self.routes)?;
        validate_routing_policy(&self.routing_policy)?;
        self.link_local = link_local_or_default(self.link_local.take());
        Ok(self)
    }
}
