// SPDX-License-Identifier: Apache-2.0

use crate::config::ifaces::{
    Bond, Bridge, Dummy, Ethernet, Veth, Vlan, Vrf, Vxlan,
};
use crate::config::types::{InterfaceName, Mtu};

/// Discriminant for the eight interface kinds a document can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum InterfaceKind {
    Ethernet,
    Bond,
    Bridge,
    Vlan,
    Vxlan,
    Vrf,
    Dummy,
    Veth,
}

impl InterfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethernet => "ethernet",
            Self::Bond => "bond",
            Self::Bridge => "bridge",
            Self::Vlan => "vlan",
            Self::Vxlan => "vxlan",
            Self::Vrf => "vrf",
            Self::Dummy => "dummy",
            Self::Veth => "veth",
        }
    }

    /// Key of the collection holding this kind in a document.
    pub fn collection_key(&self) -> &'static str {
        match self {
            Self::Ethernet => "ethernets",
            Self::Bond => "bonds",
            Self::Bridge => "bridges",
            Self::Vlan => "vlans",
            Self::Vxlan => "vxlans",
            Self::Vrf => "vrfs",
            Self::Dummy => "dummies",
            Self::Veth => "veths",
        }
    }
}

impl std::fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Borrowed view over any interface kind. Closed set, callers dispatch on
/// the variant instead of probing concrete types one by one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum InterfaceRef<'a> {
    Ethernet(&'a Ethernet),
    Bond(&'a Bond),
    Bridge(&'a Bridge),
    Vlan(&'a Vlan),
    Vxlan(&'a Vxlan),
    Vrf(&'a Vrf),
    Dummy(&'a Dummy),
    Veth(&'a Veth),
}

impl<'a> InterfaceRef<'a> {
    pub fn kind(&self) -> InterfaceKind {
        match self {
            Self::Ethernet(_) => InterfaceKind::Ethernet,
            Self::Bond(_) => InterfaceKind::Bond,
            Self::Bridge(_) => InterfaceKind::Bridge,
            Self::Vlan(_) => InterfaceKind::Vlan,
            Self::Vxlan(_) => InterfaceKind::Vxlan,
            Self::Vrf(_) => InterfaceKind::Vrf,
            Self::Dummy(_) => InterfaceKind::Dummy,
            Self::Veth(_) => InterfaceKind::Veth,
        }
    }

    pub fn vrf(&self) -> Option<&'a InterfaceName> {
        match self {
            Self::Ethernet(i) => i.vrf.as_ref(),
            Self::Bond(i) => i.vrf.as_ref(),
            Self::Bridge(i) => i.vrf.as_ref(),
            Self::Vlan(i) => i.vrf.as_ref(),
            Self::Vxlan(i) => i.vrf.as_ref(),
            Self::Vrf(_) => None,
            Self::Dummy(i) => i.vrf.as_ref(),
            Self::Veth(i) => i.vrf.as_ref(),
        }
    }

    pub fn mtu(&self) -> Option<Mtu> {
        match self {
            Self::Ethernet(i) => i.mtu,
            Self::Bond(i) => i.mtu,
            Self::Bridge(i) => i.mtu,
            Self::Vlan(i) => i.mtu,
            Self::Vxlan(i) => i.mtu,
            Self::Vrf(i) => i.mtu,
            Self::Dummy(i) => i.mtu,
            Self::Veth(i) => i.mtu,
        }
    }
}

impl<'a> From<&'a Ethernet> for InterfaceRef<'a> {
    fn from(i: &'a Ethernet) -> Self {
        Self::Ethernet(i)
    }
}

impl<'a> From<&'a Bond> for InterfaceRef<'a> {
    fn from(i: &'a Bond) -> Self {
        Self::Bond(i)
    }
}

impl<'a> From<&'a Bridge> for InterfaceRef<'a> {
    fn from(i: &'a Bridge) -> Self {
        Self::Bridge(i)
    }
}

impl<'a> From<&'a Vlan> for InterfaceRef<'a> {
    fn from(i: &'a Vlan) -> Self {
        Self::Vlan(i)
    }
}

impl<'a> From<&'a Vxlan> for InterfaceRef<'a> {
    fn from(i: &'a Vxlan) -> Self {
        Self::Vxlan(i)
    }
}

impl<'a> From<&'a Vrf> for InterfaceRef<'a> {
    fn from(i: &'a Vrf) -> Self {
        Self::Vrf(i)
    }
}

impl<'a> From<&'a Dummy> for InterfaceRef<'a> {
    fn from(i: &'a Dummy) -> Self {
        Self::Dummy(i)
    }
}

impl<'a> From<&'a Veth> for InterfaceRef<'a> {
    fn from(i: &'a Veth) -> Self {
        Self::Veth(i)
    }
}
