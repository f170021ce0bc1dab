// SPDX-License-Identifier: Apache-2.0

mod iface;
mod ifaces;
mod ip;
mod match_object;
mod nameservers;
mod net_config;
mod route;
mod routing_policy;
mod streamline;
mod topology;
mod types;

#[cfg(test)]
mod unit_tests;

pub use self::iface::{InterfaceKind, InterfaceRef};
pub use self::ifaces::{
    Bond, BondParameters, Bridge, BridgeParameters, Dummy, Ethernet, Veth,
    Vlan, VlanParameters, Vrf, Vxlan, VxlanParameters,
};
pub use self::ip::{IpInterfaceAddr, IpNetworkAddr};
pub use self::match_object::MatchObject;
pub use self::nameservers::{Fqdn, NameServers};
pub use self::net_config::{NetplannerConfig, NetworkConfig};
pub use self::route::Route;
pub use self::routing_policy::RoutingPolicy;
pub use self::types::{
    BondAdSelect, BondLacpRate, BondMode, BondTransmitHashPolicy,
    EmbeddedSwitchMode, InterfaceName, LinkLocalAddressing, MacAddress, Mtu,
    NetworkRenderer, PositiveInt, RouteScope, RouteType, TableShortInt,
    UnsignedShortInt, Version, VirtualFunctionCount, VlanId, VlanProtocol,
};
