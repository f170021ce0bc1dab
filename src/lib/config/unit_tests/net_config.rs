// SPDX-License-Identifier: Apache-2.0

use super::super::iface::InterfaceRef;
use super::super::net_config::NetplannerConfig;
use super::super::types::{InterfaceName, Version};
use crate::ErrorKind;

#[test]
fn test_decode_ethernet_and_bond() {
    let config = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  ethernets:
    eth0: {}
  bonds:
    bond0:
      parameters:
        mode: active-backup
        primary: eth0
      interfaces:
        - eth0
"#,
    )
    .unwrap();
    assert_eq!(config.network.version, Version::Second);
    let eth0: InterfaceName = "eth0".parse().unwrap();
    assert!(matches!(
        config.network.lookup(&eth0),
        Some(InterfaceRef::Ethernet(_))
    ));
    let (parent_name, parent) = config.network.parent(&eth0).unwrap().unwrap();
    assert_eq!(parent_name.as_str(), "bond0");
    assert!(matches!(parent, InterfaceRef::Bond(_)));
}

#[test]
fn test_vxlan_vni_out_of_range() {
    let result = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  vxlans:
    vxlan0:
      link: dummy0
      parameters:
        vni: 16777216
        local: 10.0.0.1
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
        assert!(e.msg().contains("VNI"));
        assert!(e.msg().contains("network.vxlans.vxlan0"));
    }
}

#[test]
fn test_vrf_reserved_table_rejected() {
    let result = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  vrfs:
    custom:
      table: 254
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.msg().contains("reserved"));
        assert!(e.msg().contains("network.vrfs.custom"));
    }
}

#[test]
fn test_veth_mutual_pairing_succeeds() {
    let config = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  veths:
    veth-b:
      link: veth-a
    veth-a:
      link: veth-b
"#,
    )
    .unwrap();
    // Stored name sorted for stable output.
    let names: Vec<&str> = config
        .network
        .veths
        .keys()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, vec!["veth-a", "veth-b"]);
}

#[test]
fn test_veth_dangling_link_fails() {
    let result = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  veths:
    veth-a:
      link: veth-c
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
        assert!(e.msg().contains("does not exist"));
    }
}

#[test]
fn test_veth_self_reference_fails() {
    let result = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  veths:
    veth-a:
      link: veth-a
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.msg().contains("itself"));
    }
}

#[test]
fn test_veth_asymmetric_pairing_fails() {
    let result = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  veths:
    veth-a:
      link: veth-b
    veth-b:
      link: veth-c
    veth-c:
      link: veth-b
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.msg().contains("same link"));
    }
}

#[test]
fn test_duplicate_name_across_kinds_fails() {
    let result = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  ethernets:
    net0: {}
  dummies:
    net0: {}
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
        assert!(e.msg().contains("net0"));
    }
}

#[test]
fn test_unknown_field_fails_with_path() {
    let result = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  ethernets:
    eth0:
      no_such_field: true
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::SchemaError);
        assert!(e.msg().contains("network.ethernets.eth0"));
    }
}

#[test]
fn test_missing_version_fails() {
    let result = NetplannerConfig::from_yaml_str(
        r#"
network:
  ethernets:
    eth0: {}
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::SchemaError);
        assert!(e.msg().contains("network.version"));
    }
}

#[test]
fn test_unknown_top_level_section_fails() {
    let result = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
bogus: {}
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.msg().contains("bogus"));
    }
}

#[test]
fn test_link_local_defaults_to_ipv6() {
    use super::super::types::LinkLocalAddressing;

    let config = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  ethernets:
    eth0: {}
"#,
    )
    .unwrap();
    let eth0: InterfaceName = "eth0".parse().unwrap();
    let link_local = config
        .network
        .ethernets
        .get(&eth0)
        .and_then(|i| i.link_local.as_ref())
        .unwrap();
    assert_eq!(link_local.len(), 1);
    assert!(link_local.contains(&LinkLocalAddressing::Ipv6));
}

#[test]
fn test_gateway_materializes_default_route() {
    let config = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 2
  ethernets:
    eth0:
      gateway4: 192.0.2.1
"#,
    )
    .unwrap();
    let eth0: InterfaceName = "eth0".parse().unwrap();
    let routes = &config.network.ethernets.get(&eth0).unwrap().routes;
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].via, Some("192.0.2.1".parse().unwrap()));
    assert_eq!(
        routes[0].description.as_deref(),
        Some("Default gateway set by gateway4")
    );
}

#[test]
fn test_decode_encode_round_trip() {
    let config = NetplannerConfig::from_yaml_str(
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
        mode: 802.3ad
      interfaces:
        - eth0
  vlans:
    vlan100:
      id: 100
      link: bond0
      addresses:
        - 192.0.2.10/24
  veths:
    veth-a:
      link: veth-b
    veth-b:
      link: veth-a
"#,
    )
    .unwrap();
    let encoded = config.to_value().unwrap();
    let decoded = NetplannerConfig::from_value(encoded).unwrap();
    assert_eq!(decoded, config);
}

#[test]
fn test_yaml_string_round_trip() {
    let config = NetplannerConfig::from_yaml_str(
        r#"
network:
  version: 3
  dummies:
    dummy0:
      link-local: [ipv4, ipv6]
"#,
    )
    .unwrap();
    let yaml = config.to_yaml_string().unwrap();
    let decoded = NetplannerConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(decoded, config);
}
