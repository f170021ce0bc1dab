// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::{link_local_or_default, validate_routes};
use crate::config::ip::IpInterfaceAddr;
use crate::config::nameservers::NameServers;
use crate::config::route::Route;
use crate::config::types::{
    InterfaceName, LinkLocalAddressing, MacAddress, Mtu, PositiveInt,
};
use crate::{ErrorKind, NetplannerError};

const VNI_MAX: u64 = 16777215;
const FLOW_LABEL_MAX: u64 = 1048575;
const IANA_VXLAN_PORT: u16 = 4789;

fn default_destination_port() -> u16 {
    IANA_VXLAN_PORT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct VxlanParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// VXLAN network identifier, 1 - 16777215.
    pub vni: PositiveInt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<IpAddr>,
    /// Local tunnel endpoint address.
    pub local: IpAddr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<IpAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tos: Option<PositiveInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<PositiveInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdb_ageing_sec: Option<PositiveInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_fdb_entries: Option<PositiveInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l2_miss_notification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l3_miss_notification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_short_circuit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_checksum: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_6_zero_checksum_tx: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_6_zero_checksum_rx: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_checksum_tx: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_checksum_rx: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_label: Option<PositiveInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_do_not_fragment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hairpin: Option<bool>,
    /// Template MAC whose first two octets are combined with the IPv4
    /// local address to derive the interface MAC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_mac: Option<MacAddress>,
    #[serde(default)]
    pub mac_learning: bool,
    #[serde(default)]
    pub learning: bool,
    #[serde(default = "default_destination_port")]
    pub destination_port: u16,
    #[serde(default)]
    pub generic_protocol_extension: bool,
    #[serde(default)]
    pub group_policy_extension: bool,
    #[serde(default)]
    pub reduce_arp_proxy: bool,
}

impl VxlanParameters {
    pub fn validate(&self) -> Result<(), NetplannerError> {
        if self.vni.value() > VNI_MAX {
            return Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!(
                    "VxlanParameters VNI={} not in 1 - {VNI_MAX}",
                    self.vni
                ),
            ));
        }
        if let Some(flow_label) = self.flow_label {
            if flow_label.value() > FLOW_LABEL_MAX {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!(
                        "VxlanParameters FlowLabel={flow_label} \
                         not in 0 - {FLOW_LABEL_MAX}"
                    ),
                ));
            }
        }
        if let Some(ttl) = self.ttl {
            if ttl.value() > 255 {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!("VxlanParameters TTL={ttl} not in 0 - 255"),
                ));
            }
        }
        if let Some(tos) = self.tos {
            if tos.value() > 63 {
                return Err(NetplannerError::new(
                    ErrorKind::ValidationError,
                    format!("VxlanParameters Tos={tos} not in 0 - 63"),
                ));
            }
        }
        Ok(())
    }

    /// Derive the interface MAC from the template MAC and the IPv4 local
    /// endpoint: first two template octets followed by the four address
    /// octets.
    pub fn derived_mac(&self) -> Result<Option<MacAddress>, NetplannerError> {
        let Some(template) = self.generate_mac.as_ref() else {
            return Ok(None);
        };
        let IpAddr::V4(local) = self.local else {
            return Err(NetplannerError::new(
                ErrorKind::ValidationError,
                "IPv6 not supported for MAC generation".to_string(),
            ));
        };
        let template = template.octets();
        let addr = local.octets();
        Ok(Some(MacAddress::from_octets([
            template[0],
            template[1],
            addr[0],
            addr[1],
            addr[2],
            addr[3],
        ])))
    }
}

/// VXLAN overlay endpoint riding on an underlay link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Vxlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: VxlanParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<NameServers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<Mtu>,
    /// Underlay link carrying the encapsulated traffic.
    pub link: InterfaceName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_local: Option<BTreeSet<LinkLocalAddressing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macaddress: Option<MacAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrf: Option<InterfaceName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<IpInterfaceAddr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
}

impl Vxlan {
    pub(crate) fn finalized(mut self) -> Result<Self, NetplannerError> {
        self.parameters.validate()?;
        validate_routes(&self.routes)?;
        self.link_local = link_local_or_default(self.link_local.take());
        if let Some(mac) = self.parameters.derived_mac()? {
            self.macaddress = Some(mac);
        }
        Ok(self)
    }
}
