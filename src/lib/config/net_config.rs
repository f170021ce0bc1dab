// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::config::ifaces::{
    Bond, Bridge, Dummy, Ethernet, Veth, Vlan, Vrf, Vxlan,
};
use crate::config::streamline::{to_schema_keys, to_wire_keys};
use crate::config::types::{InterfaceName, NetworkRenderer, Version};
use crate::{ErrorKind, NetplannerError};

/// The document aggregate: one insertion-ordered collection per interface
/// kind, keyed by interface name, plus raw pass-through directives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct NetworkConfig {
    pub version: Version,
    pub renderer: NetworkRenderer,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub dummies: IndexMap<InterfaceName, Dummy>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub ethernets: IndexMap<InterfaceName, Ethernet>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub bridges: IndexMap<InterfaceName, Bridge>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub vxlans: IndexMap<InterfaceName, Vxlan>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub bonds: IndexMap<InterfaceName, Bond>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub vlans: IndexMap<InterfaceName, Vlan>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub vrfs: IndexMap<InterfaceName, Vrf>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub veths: IndexMap<InterfaceName, Veth>,
    /// Raw directives copied into the output directory verbatim, keyed by
    /// output file stem.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub additionals: IndexMap<String, Vec<Value>>,
}

/// Top level wrapper of a configuration document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct NetplannerConfig {
    pub network: NetworkConfig,
}

impl NetplannerConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, NetplannerError> {
        let value: Value = serde_yaml::from_str(content)?;
        Self::from_value(value)
    }

    /// Decode an untyped document tree. Keys are normalized to the schema
    /// convention first, then each section is constructed strictly: any
    /// unknown key, missing required field or invariant violation fails
    /// the whole document with a dotted path in the message.
    pub fn from_value(value: Value) -> Result<Self, NetplannerError> {
        let value = to_schema_keys(value);
        let Value::Object(mut root) = value else {
            return Err(NetplannerError::new(
                ErrorKind::SchemaError,
                "Expecting a mapping at the document root".to_string(),
            ));
        };
        let network = root.remove("network").ok_or_else(|| {
            NetplannerError::new(
                ErrorKind::SchemaError,
                "network: section missing".to_string(),
            )
        })?;
        if !root.is_empty() {
            let keys: Vec<&str> = root.keys().map(String::as_str).collect();
            return Err(NetplannerError::new(
                ErrorKind::SchemaError,
                format!("Unknown top level section(s): {}", keys.join(", ")),
            ));
        }
        Ok(Self {
            network: NetworkConfig::from_value(network)?,
        })
    }

    pub fn to_value(&self) -> Result<Value, NetplannerError> {
        Ok(to_wire_keys(serde_json::to_value(self)?))
    }

    pub fn to_yaml_string(&self) -> Result<String, NetplannerError> {
        Ok(serde_yaml::to_string(&self.to_value()?)?)
    }
}

impl NetworkConfig {
    pub(crate) fn from_value(value: Value) -> Result<Self, NetplannerError> {
        let Value::Object(mut map) = value else {
            return Err(NetplannerError::new(
                ErrorKind::SchemaError,
                "network: expecting a mapping".to_string(),
            ));
        };
        let version = map.remove("version").ok_or_else(|| {
            NetplannerError::new(
                ErrorKind::SchemaError,
                "network.version: required field missing".to_string(),
            )
        })?;
        let version: Version = serde_json::from_value(version)
            .map_err(|e| NetplannerError::from(e).at_path("network.version"))?;
        let renderer: NetworkRenderer = match map.remove("renderer") {
            Some(v) => serde_json::from_value(v).map_err(|e| {
                NetplannerError::from(e).at_path("network.renderer")
            })?,
            None => NetworkRenderer::default(),
        };
        let ret = Self {
            version,
            renderer,
            dummies: decode_ifaces(map.remove("dummies"), "dummies", |i: Dummy| {
                i.finalized()
            })?,
            ethernets: decode_ifaces(
                map.remove("ethernets"),
                "ethernets",
                |i: Ethernet| i.finalized(),
            )?,
            bridges: decode_ifaces(
                map.remove("bridges"),
                "bridges",
                |i: Bridge| i.finalized(),
            )?,
            vxlans: decode_ifaces(map.remove("vxlans"), "vxlans", |i: Vxlan| {
                i.finalized()
            })?,
            bonds: decode_ifaces(map.remove("bonds"), "bonds", |i: Bond| {
                i.finalized()
            })?,
            vlans: decode_ifaces(map.remove("vlans"), "vlans", |i: Vlan| {
                i.finalized()
            })?,
            vrfs: decode_ifaces(map.remove("vrfs"), "vrfs", |i: Vrf| {
                i.finalized()
            })?,
            veths: decode_ifaces(map.remove("veths"), "veths", |i: Veth| {
                i.finalized()
            })?,
            additionals: match map.remove("additionals") {
                Some(v) => serde_json::from_value(v).map_err(|e| {
                    NetplannerError::from(e).at_path("network.additionals")
                })?,
                None => IndexMap::new(),
            },
        };
        if !map.is_empty() {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            return Err(NetplannerError::new(
                ErrorKind::SchemaError,
                format!("network: unknown section(s): {}", keys.join(", ")),
            ));
        }
        ret.finalized()
    }

    /// Cross-entity checks over the assembled document. All-or-nothing:
    /// one broken veth pair fails the whole document.
    fn finalized(mut self) -> Result<Self, NetplannerError> {
        self.validate_unique_names()?;
        for (name, veth) in self.veths.iter() {
            if veth.link == *name {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!("Link of Veth {name} can not reference to itself"),
                )
                .at_path("network.veths"));
            }
            let Some(peer) = self.veths.get(&veth.link) else {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!("Link of Veth {name} does not exist"),
                )
                .at_path("network.veths"));
            };
            if peer.link != *name {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!("Link of Veth {name} does not have the same link"),
                )
                .at_path("network.veths"));
            }
        }
        // Deterministic output ordering, not a correctness requirement.
        self.veths.sort_keys();
        Ok(self)
    }

    fn validate_unique_names(&self) -> Result<(), NetplannerError> {
        let mut seen: IndexMap<&InterfaceName, &'static str> = IndexMap::new();
        let sections: [(&'static str, Vec<&InterfaceName>); 8] = [
            ("dummies", self.dummies.keys().collect()),
            ("ethernets", self.ethernets.keys().collect()),
            ("bridges", self.bridges.keys().collect()),
            ("vxlans", self.vxlans.keys().collect()),
            ("bonds", self.bonds.keys().collect()),
            ("vlans", self.vlans.keys().collect()),
            ("vrfs", self.vrfs.keys().collect()),
            ("veths", self.veths.keys().collect()),
        ];
        for (section, names) in sections {
            for name in names {
                if let Some(other) = seen.insert(name, section) {
                    return Err(NetplannerError::new(
                        ErrorKind::ValidationError,
                        format!(
                            "Interface {name} declared in both \
                             {other} and {section}"
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn decode_ifaces<T, F>(
    section: Option<Value>,
    key: &str,
    finalize: F,
) -> Result<IndexMap<InterfaceName, T>, NetplannerError>
where
    T: serde::de::DeserializeOwned,
    F: Fn(T) -> Result<T, NetplannerError>,
{
    let Some(value) = section else {
        return Ok(IndexMap::new());
    };
    let path = format!("network.{key}");
    let Value::Object(map) = value else {
        return Err(NetplannerError::new(
            ErrorKind::SchemaError,
            "Expecting a mapping of interface names".to_string(),
        )
        .at_path(&path));
    };
    let mut ret = IndexMap::with_capacity(map.len());
    for (name, val) in map {
        let item_path = format!("{path}.{name}");
        let name = InterfaceName::try_from(name)
            .map_err(|e| e.at_path(&path))?;
        let iface: T = serde_json::from_value(val)
            .map_err(|e| NetplannerError::from(e).at_path(&item_path))?;
        let iface = finalize(iface).map_err(|e| e.at_path(&item_path))?;
        ret.insert(name, iface);
    }
    Ok(ret)
}
