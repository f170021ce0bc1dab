// SPDX-License-Identifier: Apache-2.0

//! Name-based topology joins. The document stores no parent or child
//! pointers; relationships are derived by scanning the collections for
//! name references.

use crate::config::iface::{InterfaceKind, InterfaceRef};
use crate::config::net_config::NetworkConfig;
use crate::config::types::InterfaceName;
use crate::{ErrorKind, NetplannerError};

impl NetworkConfig {
    /// Find the interface carrying `name` in any collection. Names are
    /// unique across kinds by document invariant, so at most one entry
    /// can match.
    pub fn lookup(&self, name: &InterfaceName) -> Option<InterfaceRef<'_>> {
        if let Some(i) = self.dummies.get(name) {
            return Some(i.into());
        }
        if let Some(i) = self.ethernets.get(name) {
            return Some(i.into());
        }
        if let Some(i) = self.bridges.get(name) {
            return Some(i.into());
        }
        if let Some(i) = self.vxlans.get(name) {
            return Some(i.into());
        }
        if let Some(i) = self.bonds.get(name) {
            return Some(i.into());
        }
        if let Some(i) = self.vlans.get(name) {
            return Some(i.into());
        }
        if let Some(i) = self.vrfs.get(name) {
            return Some(i.into());
        }
        self.veths.get(name).map(InterfaceRef::from)
    }

    /// Every declared interface in rendering order: virtual kinds first,
    /// physical adapters last.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&InterfaceName, InterfaceRef<'_>)> {
        self.vxlans
            .iter()
            .map(|(n, i)| (n, InterfaceRef::from(i)))
            .chain(self.vrfs.iter().map(|(n, i)| (n, InterfaceRef::from(i))))
            .chain(
                self.bridges.iter().map(|(n, i)| (n, InterfaceRef::from(i))),
            )
            .chain(self.vlans.iter().map(|(n, i)| (n, InterfaceRef::from(i))))
            .chain(self.bonds.iter().map(|(n, i)| (n, InterfaceRef::from(i))))
            .chain(
                self.dummies.iter().map(|(n, i)| (n, InterfaceRef::from(i))),
            )
            .chain(
                self.ethernets
                    .iter()
                    .map(|(n, i)| (n, InterfaceRef::from(i))),
            )
            .chain(self.veths.iter().map(|(n, i)| (n, InterfaceRef::from(i))))
    }

    /// Structural children of `name`: VLANs riding a bond, VXLANs
    /// anchored on a dummy. Membership in the opposite direction is
    /// resolved by [NetworkConfig::parent].
    pub fn children(
        &self,
        name: &InterfaceName,
    ) -> Vec<(&InterfaceName, InterfaceRef<'_>)> {
        match self.lookup(name) {
            Some(InterfaceRef::Bond(_)) => self
                .vlans
                .iter()
                .filter(|(_, vlan)| vlan.link == *name)
                .map(|(n, i)| (n, InterfaceRef::from(i)))
                .collect(),
            Some(InterfaceRef::Dummy(_)) => self
                .vxlans
                .iter()
                .filter(|(_, vxlan)| vxlan.link == *name)
                .map(|(n, i)| (n, InterfaceRef::from(i)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Structural parent of `name`, derived per kind: a VLAN's parent is
    /// its `link`, an ethernet's parent is the bond listing it, a VXLAN's
    /// parent is the bridge listing it. More than one candidate is a
    /// configuration error.
    pub fn parent(
        &self,
        name: &InterfaceName,
    ) -> Result<Option<(&InterfaceName, InterfaceRef<'_>)>, NetplannerError>
    {
        match self.lookup(name) {
            Some(InterfaceRef::Vlan(vlan)) => Ok(self
                .lookup(&vlan.link)
                .and_then(|i| self.key_of(&vlan.link).map(|k| (k, i)))),
            Some(InterfaceRef::Ethernet(_)) => {
                let mut candidates = self
                    .bonds
                    .iter()
                    .filter(|(_, bond)| bond.interfaces.contains(name));
                let first = candidates.next();
                if let Some((other, _)) = candidates.next() {
                    let Some((bond_name, _)) = first else {
                        return Err(NetplannerError::new(
                            ErrorKind::Bug,
                            format!(
                                "Second bond match without a first \
                                 for {name}"
                            ),
                        ));
                    };
                    return Err(NetplannerError::new(
                        ErrorKind::LookupAmbiguity,
                        format!(
                            "Ethernet {name} is a member of more than \
                             one bond: {bond_name}, {other}"
                        ),
                    ));
                }
                Ok(first.map(|(n, bond)| (n, InterfaceRef::from(bond))))
            }
            Some(InterfaceRef::Vxlan(_)) => {
                let mut candidates = self
                    .bridges
                    .iter()
                    .filter(|(_, bridge)| bridge.interfaces.contains(name));
                let first = candidates.next();
                if let Some((other, _)) = candidates.next() {
                    let Some((bridge_name, _)) = first else {
                        return Err(NetplannerError::new(
                            ErrorKind::Bug,
                            format!(
                                "Second bridge match without a first \
                                 for {name}"
                            ),
                        ));
                    };
                    return Err(NetplannerError::new(
                        ErrorKind::LookupAmbiguity,
                        format!(
                            "VXLAN {name} is a member of more than one \
                             bridge: {bridge_name}, {other}"
                        ),
                    ));
                }
                Ok(first.map(|(n, bridge)| (n, InterfaceRef::from(bridge))))
            }
            _ => Ok(None),
        }
    }

    /// Kind of the interface carrying `name`, if declared.
    pub fn kind_of(&self, name: &InterfaceName) -> Option<InterfaceKind> {
        self.lookup(name).map(|i| i.kind())
    }

    // The IndexMap entry key, so callers get a reference with the map's
    // lifetime instead of the argument's.
    fn key_of(&self, name: &InterfaceName) -> Option<&InterfaceName> {
        self.dummies
            .get_key_value(name)
            .map(|(k, _)| k)
            .or_else(|| self.ethernets.get_key_value(name).map(|(k, _)| k))
            .or_else(|| self.bridges.get_key_value(name).map(|(k, _)| k))
            .or_else(|| self.vxlans.get_key_value(name).map(|(k, _)| k))
            .or_else(|| self.bonds.get_key_value(name).map(|(k, _)| k))
            .or_else(|| self.vlans.get_key_value(name).map(|(k, _)| k))
            .or_else(|| self.vrfs.get_key_value(name).map(|(k, _)| k))
            .or_else(|| self.veths.get_key_value(name).map(|(k, _)| k))
    }
}
