// SPDX-License-Identifier: Apache-2.0

mod bond;
mod bridge;
mod dummy;
mod ethernet;
mod veth;
mod vlan;
mod vrf;
mod vxlan;

use std::collections::BTreeSet;
use std::net::IpAddr;

pub use self::bond::{Bond, BondParameters};
pub use self::bridge::{Bridge, BridgeParameters};
pub use self::dummy::Dummy;
pub use self::ethernet::Ethernet;
pub use self::veth::Veth;
pub use self::vlan::{Vlan, VlanParameters};
pub use self::vrf::Vrf;
pub use self::vxlan::{Vxlan, VxlanParameters};

use super::route::Route;
use super::routing_policy::RoutingPolicy;
use super::types::LinkLocalAddressing;
use crate::NetplannerError;

/// Link-local addressing defaults to IPv6 only when a document does not
/// mention the field at all. Injected as a pure builder step during
/// `finalized()`, never by mutating an already constructed value.
pub(crate) fn link_local_or_default(
    link_local: Option<BTreeSet<LinkLocalAddressing>>,
) -> Option<BTreeSet<LinkLocalAddressing>> {
    Some(link_local.unwrap_or_else(|| {
        let mut ret = BTreeSet::new();
        ret.insert(LinkLocalAddressing::Ipv6);
        ret
    }))
}

/// Materialize the `gateway4`/`gateway6` shortcuts as synthetic default
/// routes. Skips routes already present so that decoding an encoded
/// document does not duplicate them.
pub(crate) fn push_gateway_routes(
    routes: &mut Vec<Route>,
    gateway4: Option<std::net::Ipv4Addr>,
    gateway6: Option<std::net::Ipv6Addr>,
) {
    if let Some(gw) = gateway4 {
        let route = Route::default_gateway(IpAddr::V4(gw), "gateway4");
        if !routes.contains(&route) {
            routes.push(route);
        }
    }
    if let Some(gw) = gateway6 {
        let route = Route::default_gateway(IpAddr::V6(gw), "gateway6");
        if !routes.contains(&route) {
            routes.push(route);
        }
    }
}

pub(crate) fn validate_routes(
    routes: &[Route],
) -> Result<(), NetplannerError> {
    for (index, route) in routes.iter().enumerate() {
        route
            .validate()
            .map_err(|e| e.at_path(&format!("routes[{index}]")))?;
    }
    Ok(())
}

pub(crate) fn validate_routing_policy(
    policies: &[RoutingPolicy],
) -> Result<(), NetplannerError> {
    for (index, policy) in policies.iter().enumerate() {
        policy
            .validate()
            .map_err(|e| e.at_path(&format!("routing_policy[{index}]")))?;
    }
    Ok(())
}
