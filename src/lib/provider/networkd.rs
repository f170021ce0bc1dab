// SPDX-License-Identifier: Apache-2.0

//! systemd-networkd renderer. Text generation is kept in pure functions,
//! the provider only decides file names and performs the writes.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

use crate::config::{
    Ethernet, InterfaceKind, InterfaceName, InterfaceRef,
    LinkLocalAddressing, NetplannerConfig, NetworkConfig, Route,
    RoutingPolicy, Veth,
};
use crate::{ErrorKind, NetplannerError};

pub const DEFAULT_PATH: &str = "etc/systemd/network";

/// Renders a validated document into networkd unit files and drives the
/// daemon afterwards if asked to.
#[derive(Debug)]
pub struct NetworkdProvider<'a> {
    config: &'a NetplannerConfig,
    path: PathBuf,
}

impl<'a> NetworkdProvider<'a> {
    pub fn new(
        config: &'a NetplannerConfig,
        local: bool,
        path: &str,
    ) -> Self {
        let path = path
            .trim_start_matches("./")
            .trim_start_matches('/')
            .to_string();
        let prefix = if local { "./" } else { "/" };
        Self {
            config,
            path: PathBuf::from(format!("{prefix}{path}")),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.path.as_path()
    }

    /// Write every netdev, link, network and additionals file for the
    /// document.
    pub fn render(&self) -> Result<(), NetplannerError> {
        std::fs::create_dir_all(&self.path)?;
        for (file_name, content) in self.render_files()? {
            let path = self.path.join(&file_name);
            log::info!("Write: {}", path.display());
            std::fs::write(&path, content)?;
        }
        Ok(())
    }

    /// All output files as (name, content) pairs. Pure except for the
    /// topology joins over the already immutable document.
    pub fn render_files(
        &self,
    ) -> Result<Vec<(String, String)>, NetplannerError> {
        let network = &self.config.network;
        let mut ret: Vec<(String, String)> = Vec::new();
        // netdev units: one per virtual interface, one per veth pair.
        let mut handled_veth_peers: Vec<&InterfaceName> = Vec::new();
        for (name, iface) in network.iter() {
            let content = match iface {
                InterfaceRef::Ethernet(_) => continue,
                InterfaceRef::Veth(veth) => {
                    if handled_veth_peers.contains(&name) {
                        continue;
                    }
                    handled_veth_peers.push(&veth.link);
                    let peer =
                        network.veths.get(&veth.link).ok_or_else(|| {
                            NetplannerError::new(
                                ErrorKind::Bug,
                                format!(
                                    "Veth {name} peer {} vanished after \
                                     validation",
                                    veth.link
                                ),
                            )
                        })?;
                    veth_netdev_text(name, veth, &veth.link, peer)
                }
                _ => netdev_text(name, iface),
            };
            ret.push((unit_file_name(name, iface.kind(), "netdev"), content));
        }
        for (name, ethernet) in network.ethernets.iter() {
            ret.push((
                unit_file_name(name, InterfaceKind::Ethernet, "link"),
                link_text(name, ethernet),
            ));
        }
        for (name, iface) in network.iter() {
            ret.push((
                unit_file_name(name, iface.kind(), "network"),
                network_text(network, name, iface)?,
            ));
        }
        for (file_name, data) in network.additionals.iter() {
            if !file_name.ends_with("netdev")
                && !file_name.ends_with("network")
                && !file_name.ends_with("link")
            {
                return Err(NetplannerError::new(
                    ErrorKind::InvalidArgument,
                    format!(
                        "Additional file {file_name} must end with \
                         netdev, network or link"
                    ),
                ));
            }
            ret.push((file_name.clone(), additional_text(data)));
        }
        Ok(ret)
    }

    /// `systemctl <verb> systemd-networkd`.
    pub fn networkd_restart(&self) -> Result<(), NetplannerError> {
        run_command(&["/usr/bin/env", "systemctl", "restart", "systemd-networkd"])
    }

    /// `networkctl reload`.
    pub fn networkctl_reload(&self) -> Result<(), NetplannerError> {
        run_command(&["/usr/bin/env", "networkctl", "reload"])
    }
}

fn run_command(command: &[&str]) -> Result<(), NetplannerError> {
    let output = Command::new(command[0])
        .args(&command[1..])
        .output()
        .map_err(|e| {
            NetplannerError::new(
                ErrorKind::IoError,
                format!("Failed to run {}: {e}", command.join(" ")),
            )
        })?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stdout.is_empty() {
        log::info!("{stdout}");
    }
    if !stderr.is_empty() {
        log::error!("{stderr}");
    }
    if !output.status.success() {
        return Err(NetplannerError::new(
            ErrorKind::IoError,
            format!("Command {} failed: {}", command.join(" "), output.status),
        ));
    }
    Ok(())
}

/// File ordering mirrors the dependency chain: physical adapters first,
/// stacked virtual devices later.
fn priority(kind: InterfaceKind) -> u8 {
    match kind {
        InterfaceKind::Ethernet => 10,
        InterfaceKind::Bond | InterfaceKind::Dummy => 11,
        InterfaceKind::Vrf => 12,
        InterfaceKind::Bridge => 13,
        InterfaceKind::Vxlan => 14,
        InterfaceKind::Vlan => 15,
        InterfaceKind::Veth => 16,
    }
}

fn unit_file_name(
    name: &InterfaceName,
    kind: InterfaceKind,
    ending: &str,
) -> String {
    format!("{}-{}.{}", priority(kind), name, ending)
}

pub(crate) fn to_systemd_bool(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub(crate) fn to_systemd_link_local(
    value: Option<&BTreeSet<LinkLocalAddressing>>,
) -> &'static str {
    match value {
        None => "no",
        Some(set) => {
            match (
                set.contains(&LinkLocalAddressing::Ipv4),
                set.contains(&LinkLocalAddressing::Ipv6),
            ) {
                (true, true) => "yes",
                (true, false) => "ipv4",
                (false, true) => "ipv6",
                (false, false) => "no",
            }
        }
    }
}

/// Incremental builder for the INI-style unit file dialect networkd
/// reads.
struct UnitText(String);

impl UnitText {
    fn new() -> Self {
        Self(String::new())
    }

    fn section(&mut self, name: &str) {
        if !self.0.is_empty() {
            self.0.push('\n');
        }
        self.0.push('[');
        self.0.push_str(name);
        self.0.push_str("]\n");
    }

    fn entry(&mut self, key: &str, value: impl std::fmt::Display) {
        self.0.push_str(key);
        self.0.push('=');
        self.0.push_str(&value.to_string());
        self.0.push('\n');
    }

    fn entry_opt(&mut self, key: &str, value: Option<impl std::fmt::Display>) {
        if let Some(value) = value {
            self.entry(key, value);
        }
    }

    fn entry_bool_opt(&mut self, key: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.entry(key, to_systemd_bool(value));
        }
    }

    fn finish(self) -> String {
        self.0
    }
}

fn netdev_header(
    text: &mut UnitText,
    name: &InterfaceName,
    kind: &str,
    iface: InterfaceRef<'_>,
) {
    text.section("NetDev");
    text.entry("Name", name);
    text.entry("Kind", kind);
    text.entry_opt("MTUBytes", iface.mtu());
}

fn netdev_text(name: &InterfaceName, iface: InterfaceRef<'_>) -> String {
    let mut text = UnitText::new();
    match iface {
        InterfaceRef::Bond(bond) => {
            netdev_header(&mut text, name, "bond", iface);
            text.entry_opt("MACAddress", bond.macaddress.as_ref());
            text.section("Bond");
            text.entry("Mode", bond.parameters.mode.as_str());
            text.entry_opt(
                "TransmitHashPolicy",
                bond.parameters
                    .transmit_hash_policy
                    .as_ref()
                    .map(|p| p.as_str()),
            );
            text.entry_opt(
                "AdSelect",
                bond.parameters.ad_select.as_ref().map(|s| s.as_str()),
            );
            text.entry(
                "LACPTransmitRate",
                bond.parameters.lacp_rate.as_str(),
            );
            text.entry(
                "MIIMonitorSec",
                format!("{}ms", bond.parameters.mii_monitor_interval),
            );
        }
        InterfaceRef::Bridge(bridge) => {
            netdev_header(&mut text, name, "bridge", iface);
            text.entry_opt("MACAddress", bridge.macaddress.as_ref());
            text.section("Bridge");
            text.entry(
                "STP",
                to_systemd_bool(bridge.parameters.stp),
            );
            text.entry_bool_opt(
                "VLANFiltering",
                bridge.parameters.vlan_filtering,
            );
            text.entry_opt(
                "VLANProtocol",
                bridge.parameters.vlan_protocol.as_ref(),
            );
            text.entry_opt(
                "DefaultPVID",
                bridge.parameters.default_vlan_port_id,
            );
            text.entry_opt("Priority", bridge.parameters.priority);
            text.entry_opt("AgeingTimeSec", bridge.parameters.ageing_time);
            text.entry_opt(
                "ForwardDelaySec",
                bridge.parameters.forward_delay,
            );
            text.entry_opt("HelloTimeSec", bridge.parameters.hello_time);
            text.entry_opt("MaxAgeSec", bridge.parameters.max_age);
            text.entry_bool_opt(
                "MulticastSnooping",
                bridge.parameters.multicast_snooping,
            );
        }
        InterfaceRef::Vlan(vlan) => {
            netdev_header(&mut text, name, "vlan", iface);
            text.entry_opt("MACAddress", vlan.macaddress.as_ref());
            text.section("VLAN");
            text.entry("Id", vlan.id);
            if let Some(parameters) = vlan.parameters.as_ref() {
                text.entry_opt("Protocol", parameters.protocol.as_ref());
                text.entry_bool_opt("GVRP", parameters.gvrp);
                text.entry_bool_opt("MVRP", parameters.mvrp);
                text.entry_bool_opt(
                    "LooseBinding",
                    parameters.loose_binding,
                );
                text.entry_bool_opt(
                    "ReorderHeader",
                    parameters.reorder_header,
                );
            }
        }
        InterfaceRef::Vxlan(vxlan) => {
            netdev_header(&mut text, name, "vxlan", iface);
            text.entry_opt("MACAddress", vxlan.macaddress.as_ref());
            let p = &vxlan.parameters;
            text.section("VXLAN");
            text.entry("VNI", p.vni);
            text.entry("Local", p.local);
            text.entry_opt("Remote", p.remote);
            text.entry_opt("Group", p.group);
            text.entry_opt("TOS", p.tos);
            text.entry_opt("TTL", p.ttl);
            text.entry("MacLearning", to_systemd_bool(p.mac_learning));
            text.entry_opt("FDBAgeingSec", p.fdb_ageing_sec);
            text.entry_opt("MaximumFDBEntries", p.maximum_fdb_entries);
            text.entry(
                "ReduceARPProxy",
                to_systemd_bool(p.reduce_arp_proxy),
            );
            text.entry_bool_opt(
                "L2MissNotification",
                p.l2_miss_notification,
            );
            text.entry_bool_opt(
                "L3MissNotification",
                p.l3_miss_notification,
            );
            text.entry_bool_opt(
                "RouteShortCircuit",
                p.route_short_circuit,
            );
            text.entry_bool_opt("UDPChecksum", p.udp_checksum);
            text.entry_bool_opt(
                "UDP6ZeroChecksumTx",
                p.udp_6_zero_checksum_tx,
            );
            text.entry_bool_opt(
                "UDP6ZeroChecksumRx",
                p.udp_6_zero_checksum_rx,
            );
            text.entry_bool_opt("RemoteChecksumTx", p.remote_checksum_tx);
            text.entry_bool_opt("RemoteChecksumRx", p.remote_checksum_rx);
            text.entry_opt("FlowLabel", p.flow_label);
            text.entry_bool_opt("IPDoNotFragment", p.ip_do_not_fragment);
            text.entry("DestinationPort", p.destination_port);
            text.entry(
                "GenericProtocolExtension",
                to_systemd_bool(p.generic_protocol_extension),
            );
            text.entry(
                "GroupPolicyExtension",
                to_systemd_bool(p.group_policy_extension),
            );
        }
        InterfaceRef::Vrf(vrf) => {
            netdev_header(&mut text, name, "vrf", iface);
            text.entry_opt("MACAddress", vrf.macaddress.as_ref());
            text.section("VRF");
            text.entry("Table", vrf.table);
        }
        InterfaceRef::Dummy(dummy) => {
            netdev_header(&mut text, name, "dummy", iface);
            text.entry_opt("MACAddress", dummy.macaddress.as_ref());
        }
        InterfaceRef::Ethernet(_) | InterfaceRef::Veth(_) => {}
    }
    text.finish()
}

fn veth_netdev_text(
    name: &InterfaceName,
    veth: &Veth,
    peer_name: &InterfaceName,
    peer: &Veth,
) -> String {
    let mut text = UnitText::new();
    netdev_header(&mut text, name, "veth", InterfaceRef::Veth(veth));
    text.entry_opt("MACAddress", veth.macaddress.as_ref());
    text.section("Peer");
    text.entry("Name", peer_name);
    text.entry_opt("MACAddress", peer.macaddress.as_ref());
    text.finish()
}

fn link_text(name: &InterfaceName, ethernet: &Ethernet) -> String {
    let mut text = UnitText::new();
    text.section("Match");
    match ethernet.r#match.as_ref() {
        Some(m) => {
            text.entry_opt("MACAddress", m.macaddress.as_ref());
            text.entry_opt("Driver", m.driver.as_ref());
            text.entry_opt("Path", m.pciaddress.as_ref());
            text.entry_opt("OriginalName", m.name.as_ref());
        }
        None => text.entry("OriginalName", name),
    }
    text.section("Link");
    text.entry_opt(
        "Name",
        ethernet.set_name.as_ref().filter(|n| *n != name),
    );
    text.entry_opt("MACAddress", ethernet.macaddress.as_ref());
    text.entry_opt("MTUBytes", ethernet.mtu);
    text.entry(
        "WakeOnLan",
        if ethernet.wakeonlan { "magic" } else { "off" },
    );
    text.finish()
}

fn route_section(text: &mut UnitText, route: &Route) {
    text.section("Route");
    text.entry_opt("Source", route.from.as_ref());
    text.entry_opt("Destination", route.to.as_ref());
    text.entry_opt("Gateway", route.via);
    text.entry_bool_opt("GatewayOnLink", route.on_link);
    text.entry_opt("Table", route.table);
    text.entry_opt("Metric", route.metric);
    text.entry_opt("Scope", route.scope.as_ref().map(|s| s.as_str()));
    text.entry_opt("Type", route.route_type.as_ref().map(|t| t.as_str()));
    text.entry_opt("MTUBytes", route.mtu);
    text.entry_opt(
        "InitialCongestionWindow",
        route.congestion_window,
    );
    text.entry_opt(
        "InitialAdvertisedReceiveWindow",
        route.advertised_receive_window,
    );
}

fn routing_policy_section(text: &mut UnitText, policy: &RoutingPolicy) {
    text.section("RoutingPolicyRule");
    text.entry_opt("From", policy.from.as_ref());
    text.entry_opt("To", policy.to.as_ref());
    text.entry_opt("Table", policy.table);
    text.entry_opt("Priority", policy.priority);
    text.entry_opt("FirewallMark", policy.mark);
    text.entry_opt("TypeOfService", policy.type_of_service);
}

fn network_text(
    network: &NetworkConfig,
    name: &InterfaceName,
    iface: InterfaceRef<'_>,
) -> Result<String, NetplannerError> {
    let mut text = UnitText::new();
    text.section("Match");
    text.entry("Name", name);
    text.section("Network");
    match iface {
        InterfaceRef::Ethernet(i) => {
            text.entry_opt("Description", i.description.as_ref());
            text.entry(
                "LinkLocalAddressing",
                to_systemd_link_local(i.link_local.as_ref()),
            );
            text.entry_bool_opt("IPv6AcceptRA", i.accept_ra);
            text.entry("EmitLLDP", to_systemd_bool(i.emit_lldp));
            text.entry_opt("VRF", i.vrf.as_ref());
            nameservers_entries(&mut text, i.nameservers.as_ref());
            // Membership is derived, the bond netdev never lists its
            // ports.
            if let Some((bond_name, _)) = network.parent(name)? {
                text.entry("Bond", bond_name);
            }
            for addr in &i.addresses {
                text.entry("Address", addr);
            }
            for route in &i.routes {
                route_section(&mut text, route);
            }
            for policy in &i.routing_policy {
                routing_policy_section(&mut text, policy);
            }
        }
        InterfaceRef::Bond(i) => {
            text.entry_opt("Description", i.description.as_ref());
            text.entry(
                "LinkLocalAddressing",
                to_systemd_link_local(i.link_local.as_ref()),
            );
            text.entry_opt("VRF", i.vrf.as_ref());
            nameservers_entries(&mut text, i.nameservers.as_ref());
            for (vlan_name, _) in
                network.vlans.iter().filter(|(_, v)| v.link == *name)
            {
                text.entry("VLAN", vlan_name);
            }
            for addr in &i.addresses {
                text.entry("Address", addr);
            }
            for route in &i.routes {
                route_section(&mut text, route);
            }
            for policy in &i.routing_policy {
                routing_policy_section(&mut text, policy);
            }
        }
        InterfaceRef::Bridge(i) => {
            text.entry_opt("Description", i.description.as_ref());
            text.entry(
                "LinkLocalAddressing",
                to_systemd_link_local(i.link_local.as_ref()),
            );
            text.entry_opt("VRF", i.vrf.as_ref());
            nameservers_entries(&mut text, i.nameservers.as_ref());
            for addr in &i.addresses {
                text.entry("Address", addr);
            }
            for route in &i.routes {
                route_section(&mut text, route);
            }
            for policy in &i.routing_policy {
                routing_policy_section(&mut text, policy);
            }
        }
        InterfaceRef::Vlan(i) => {
            text.entry_opt("Description", i.description.as_ref());
            text.entry(
                "LinkLocalAddressing",
                to_systemd_link_local(i.link_local.as_ref()),
            );
            text.entry_opt("VRF", i.vrf.as_ref());
            nameservers_entries(&mut text, i.nameservers.as_ref());
            for addr in &i.addresses {
                text.entry("Address", addr);
            }
            for route in &i.routes {
                route_section(&mut text, route);
            }
            for policy in &i.routing_policy {
                routing_policy_section(&mut text, policy);
            }
        }
        InterfaceRef::Vxlan(i) => {
            text.entry_opt("Description", i.description.as_ref());
            text.entry(
                "LinkLocalAddressing",
                to_systemd_link_local(i.link_local.as_ref()),
            );
            text.entry_opt("VRF", i.vrf.as_ref());
            nameservers_entries(&mut text, i.nameservers.as_ref());
            if let Some((bridge_name, _)) = network.parent(name)? {
                text.entry("Bridge", bridge_name);
            }
            for addr in &i.addresses {
                text.entry("Address", addr);
            }
            for route in &i.routes {
                route_section(&mut text, route);
            }
        }
        InterfaceRef::Vrf(i) => {
            text.entry_opt("Description", i.description.as_ref());
            text.entry(
                "LinkLocalAddressing",
                to_systemd_link_local(i.link_local.as_ref()),
            );
            nameservers_entries(&mut text, i.nameservers.as_ref());
            for addr in &i.addresses {
                text.entry("Address", addr);
            }
            for route in &i.routes {
                route_section(&mut text, route);
            }
            for policy in &i.routing_policy {
                routing_policy_section(&mut text, policy);
            }
        }
        InterfaceRef::Dummy(i) => {
            text.entry_opt("Description", i.description.as_ref());
            text.entry(
                "LinkLocalAddressing",
                to_systemd_link_local(i.link_local.as_ref()),
            );
            text.entry_opt("VRF", i.vrf.as_ref());
            nameservers_entries(&mut text, i.nameservers.as_ref());
            for (vxlan_name, _) in
                network.vxlans.iter().filter(|(_, v)| v.link == *name)
            {
                text.entry("VXLAN", vxlan_name);
            }
            for addr in &i.addresses {
                text.entry("Address", addr);
            }
            for route in &i.routes {
                route_section(&mut text, route);
            }
            for policy in &i.routing_policy {
                routing_policy_section(&mut text, policy);
            }
        }
        InterfaceRef::Veth(i) => {
            text.entry_opt("Description", i.description.as_ref());
            text.entry(
                "LinkLocalAddressing",
                to_systemd_link_local(i.link_local.as_ref()),
            );
            text.entry_opt("VRF", i.vrf.as_ref());
            for addr in &i.addresses {
                text.entry("Address", addr);
            }
            for route in &i.routes {
                route_section(&mut text, route);
            }
            for policy in &i.routing_policy {
                routing_policy_section(&mut text, policy);
            }
        }
    }
    Ok(text.finish())
}

fn nameservers_entries(
    text: &mut UnitText,
    nameservers: Option<&crate::config::NameServers>,
) {
    if let Some(ns) = nameservers {
        for addr in &ns.addresses {
            text.entry("DNS", addr);
        }
        if !ns.search.is_empty() {
            text.entry(
                "Domains",
                ns.search
                    .iter()
                    .map(|d| d.as_str())
                    .collect::<Vec<&str>>()
                    .join(" "),
            );
        }
    }
}

/// Pass-through directives: every list item is a mapping of section name
/// to its key/value entries, emitted in declaration order.
fn additional_text(data: &[Value]) -> String {
    let mut text = UnitText::new();
    for item in data {
        let Value::Object(sections) = item else {
            continue;
        };
        for (section, entries) in sections {
            text.section(section);
            if let Value::Object(entries) = entries {
                for (key, value) in entries {
                    match value {
                        Value::String(s) => text.entry(key, s),
                        other => text.entry(key, other),
                    }
                }
            }
        }
    }
    text.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetplannerConfig;

    fn sample_config() -> NetplannerConfig {
        NetplannerConfig::from_yaml_str(
            r#"
network:
  version: 2
  ethernets:
    eth0:
      mtu: 9000
      gateway4: 192.0.2.1
  bonds:
    bond0:
      parameters:
        mode: active-backup
      interfaces:
        - eth0
  vlans:
    bond0.100:
      id: 100
      link: bond0
      addresses:
        - 192.0.2.10/24
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_priority_ordering_follows_dependency_chain() {
        assert!(
            priority(InterfaceKind::Ethernet) < priority(InterfaceKind::Bond)
        );
        assert!(priority(InterfaceKind::Bond) < priority(InterfaceKind::Vlan));
        assert!(priority(InterfaceKind::Vlan) < priority(InterfaceKind::Veth));
    }

    #[test]
    fn test_link_local_filter() {
        use crate::config::LinkLocalAddressing;
        use std::collections::BTreeSet;

        assert_eq!(to_systemd_link_local(None), "no");
        let empty = BTreeSet::new();
        assert_eq!(to_systemd_link_local(Some(&empty)), "no");
        let mut set = BTreeSet::new();
        set.insert(LinkLocalAddressing::Ipv6);
        assert_eq!(to_systemd_link_local(Some(&set)), "ipv6");
        set.insert(LinkLocalAddressing::Ipv4);
        assert_eq!(to_systemd_link_local(Some(&set)), "yes");
    }

    #[test]
    fn test_bond_netdev_text() {
        let config = sample_config();
        let name: InterfaceName = "bond0".parse().unwrap();
        let bond = config.network.bonds.get(&name).unwrap();
        let text = netdev_text(&name, InterfaceRef::Bond(bond));
        assert!(text.contains("[NetDev]\nName=bond0\nKind=bond"));
        assert!(text.contains("[Bond]\nMode=active-backup"));
        assert!(text.contains("LACPTransmitRate=fast"));
        assert!(text.contains("MIIMonitorSec=100ms"));
    }

    #[test]
    fn test_ethernet_network_references_bond() {
        let config = sample_config();
        let name: InterfaceName = "eth0".parse().unwrap();
        let eth = config.network.ethernets.get(&name).unwrap();
        let text = network_text(
            &config.network,
            &name,
            InterfaceRef::Ethernet(eth),
        )
        .unwrap();
        assert!(text.contains("Bond=bond0"));
        assert!(text.contains("LinkLocalAddressing=ipv6"));
        assert!(text.contains("[Route]\nGateway=192.0.2.1"));
    }

    #[test]
    fn test_bond_network_lists_child_vlan() {
        let config = sample_config();
        let name: InterfaceName = "bond0".parse().unwrap();
        let bond = config.network.bonds.get(&name).unwrap();
        let text =
            network_text(&config.network, &name, InterfaceRef::Bond(bond))
                .unwrap();
        assert!(text.contains("VLAN=bond0.100"));
    }

    #[test]
    fn test_render_files_names() {
        let config = sample_config();
        let provider = NetworkdProvider::new(&config, true, DEFAULT_PATH);
        let files = provider.render_files().unwrap();
        let names: Vec<&str> =
            files.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"11-bond0.netdev"));
        assert!(names.contains(&"10-eth0.link"));
        assert!(names.contains(&"10-eth0.network"));
        assert!(names.contains(&"15-bond0.100.netdev"));
        assert!(names.contains(&"15-bond0.100.network"));
        // Ethernets never get a netdev unit.
        assert!(!names.contains(&"10-eth0.netdev"));
    }

    #[test]
    fn test_additional_text_sections() {
        let data = vec![serde_json::json!({
            "Match": {"Name": "eth1"},
            "Network": {"DHCP": "yes"}
        })];
        let text = additional_text(&data);
        assert!(text.contains("[Match]\nName=eth1"));
        assert!(text.contains("[Network]\nDHCP=yes"));
    }
}
