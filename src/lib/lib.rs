// SPDX-License-Identifier: Apache-2.0

mod config;
mod error;
mod loader;
mod provider;
mod sriov;

pub use self::config::{
    Bond, BondAdSelect, BondLacpRate, BondMode, BondParameters,
    BondTransmitHashPolicy, Bridge, BridgeParameters, Dummy,
    EmbeddedSwitchMode, Ethernet, Fqdn, InterfaceKind, InterfaceName,
    InterfaceRef, IpInterfaceAddr, IpNetworkAddr, LinkLocalAddressing,
    MacAddress, MatchObject, Mtu, NameServers, NetplannerConfig,
    NetworkConfig, NetworkRenderer, PositiveInt, Route, RouteScope,
    RouteType, RoutingPolicy, TableShortInt, UnsignedShortInt, Version,
    Veth, VirtualFunctionCount, Vlan, VlanId, VlanParameters, VlanProtocol,
    Vrf, Vxlan, VxlanParameters,
};
pub use self::error::{ErrorKind, NetplannerError};
pub use self::loader::ConfigLoader;
pub use self::provider::{NetworkdProvider, DEFAULT_PATH};
pub use self::sriov::{PciNetDevice, SriovManager};
