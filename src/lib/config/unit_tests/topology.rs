// SPDX-License-Identifier: Apache-2.0

use super::super::iface::{InterfaceKind, InterfaceRef};
use super::super::net_config::NetplannerConfig;
use super::super::types::InterfaceName;
use crate::ErrorKind;

fn sample_config() -> NetplannerConfig {
    NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  ethernets:
    eth0: {}
    eth1: {}
  bonds:
    b0:
      interfaces:
        - eth0
        - eth1
  vlans:
    v1:
      id: 100
      link: b0
  dummies:
    d0: {}
  vxlans:
    vx0:
      link: d0
      parameters:
        vni: 4000
        local: 10.0.0.1
  bridges:
    br0:
      interfaces:
        - vx0
"#,
    )
    .unwrap()
}

fn name(value: &str) -> InterfaceName {
    value.parse().unwrap()
}

#[test]
fn test_bond_children_are_its_vlans() {
    let config = sample_config();
    let children = config.network.children(&name("b0"));
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].0.as_str(), "v1");
    assert!(matches!(children[0].1, InterfaceRef::Vlan(_)));
}

#[test]
fn test_dummy_children_are_its_vxlans() {
    let config = sample_config();
    let children = config.network.children(&name("d0"));
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].0.as_str(), "vx0");
    assert!(matches!(children[0].1, InterfaceRef::Vxlan(_)));
}

#[test]
fn test_ethernet_has_no_children() {
    let config = sample_config();
    assert!(config.network.children(&name("eth0")).is_empty());
}

#[test]
fn test_ethernet_parent_is_containing_bond() {
    let config = sample_config();
    let (parent_name, parent) =
        config.network.parent(&name("eth1")).unwrap().unwrap();
    assert_eq!(parent_name.as_str(), "b0");
    assert!(matches!(parent, InterfaceRef::Bond(_)));
}

#[test]
fn test_vlan_parent_is_its_link() {
    let config = sample_config();
    let (parent_name, parent) =
        config.network.parent(&name("v1")).unwrap().unwrap();
    assert_eq!(parent_name.as_str(), "b0");
    assert!(matches!(parent, InterfaceRef::Bond(_)));
}

#[test]
fn test_vxlan_parent_is_containing_bridge() {
    let config = sample_config();
    let (parent_name, parent) =
        config.network.parent(&name("vx0")).unwrap().unwrap();
    assert_eq!(parent_name.as_str(), "br0");
    assert!(matches!(parent, InterfaceRef::Bridge(_)));
}

#[test]
fn test_bond_has_no_parent() {
    let config = sample_config();
    assert_eq!(config.network.parent(&name("b0")).unwrap(), None);
}

#[test]
fn test_ethernet_in_two_bonds_is_ambiguous() {
    let config = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  ethernets:
    eth0: {}
  bonds:
    b0:
      interfaces:
        - eth0
    b1:
      interfaces:
        - eth0
"#,
    )
    .unwrap();
    let result = config.network.parent(&name("eth0"));
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::LookupAmbiguity);
        assert!(e.msg().contains("more than one bond"));
    }
}

#[test]
fn test_lookup_reports_kind() {
    let config = sample_config();
    assert_eq!(
        config.network.kind_of(&name("br0")),
        Some(InterfaceKind::Bridge)
    );
    assert_eq!(
        config.network.kind_of(&name("vx0")),
        Some(InterfaceKind::Vxlan)
    );
    assert_eq!(config.network.kind_of(&name("nope")), None);
}

#[test]
fn test_lookup_misses_undeclared_name() {
    let config = sample_config();
    assert!(config.network.lookup(&name("eth9")).is_none());
}

#[test]
fn test_iter_orders_virtual_before_physical() {
    let config = sample_config();
    let names: Vec<&str> =
        config.network.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["vx0", "br0", "v1", "b0", "d0", "eth0", "eth1"]);
}
