// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    link_local_or_default, validate_routes, validate_routing_policy,
};
use crate::config::ip::IpInterfaceAddr;
use crate::config::match_object::MatchObject;
use crate::config::nameservers::NameServers;
use crate::config::route::Route;
use crate::config::routing_policy::RoutingPolicy;
use crate::config::types::{
    InterfaceName, LinkLocalAddressing, MacAddress, Mtu,
};
use crate::NetplannerError;

/// Always-up virtual interface, typically the VTEP anchor for VXLANs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Dummy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macaddress: Option<MacAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<NameServers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#match: Option<MatchObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<Mtu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_local: Option<BTreeSet<LinkLocalAddressing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf: Option<InterfaceName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<IpInterfaceAddr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routing_policy: Vec<RoutingPolicy>,
}

impl Dummy {
    pub(crate) fn finalized(mut self) -> Result<Self, NetplannerError> {
        validate_routes(&self.routes)?;
        validate_routing_policy(&self.routing_policy)?;
        self.link_local = link_local_or_default(self.link_local.take());
        Ok(self)
    }
}
