// SPDX-License-Identifier: Apache-2.0

use serde_json::json;

use super::super::ifaces::VxlanParameters;
use crate::ErrorKind;

fn parameters(overrides: serde_json::Value) -> VxlanParameters {
    let mut value = json!({
        "vni": 100,
        "local": "10.0.0.1"
    });
    if let (Some(base), Some(extra)) =
        (value.as_object_mut(), overrides.as_object())
    {
        for (key, val) in extra {
            base.insert(key.clone(), val.clone());
        }
    }
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_vni_upper_bound() {
    let params = parameters(json!({"vni": 16777216i64}));
    let result = params.validate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
        assert!(e.msg().contains("VNI"));
    }
    assert!(parameters(json!({"vni": 16777215i64})).validate().is_ok());
}

#[test]
fn test_flow_label_bound() {
    assert!(parameters(json!({"flow_label": 1048575}))
        .validate()
        .is_ok());
    assert!(parameters(json!({"flow_label": 1048576}))
        .validate()
        .is_err());
}

#[test]
fn test_ttl_and_tos_bounds() {
    assert!(parameters(json!({"ttl": 255})).validate().is_ok());
    assert!(parameters(json!({"ttl": 256})).validate().is_err());
    assert!(parameters(json!({"tos": 63})).validate().is_ok());
    assert!(parameters(json!({"tos": 64})).validate().is_err());
}

#[test]
fn test_destination_port_defaults_to_iana() {
    assert_eq!(parameters(json!({})).destination_port, 4789);
}

#[test]
fn test_mac_derived_from_template_and_local() {
    let params = parameters(json!({
        "generate_mac": "aa:bb:00:00:00:00",
        "local": "10.1.2.3"
    }));
    let mac = params.derived_mac().unwrap().unwrap();
    assert_eq!(mac.as_str(), "aa:bb:0a:01:02:03");
}

#[test]
fn test_mac_derivation_requires_ipv4_local() {
    let params = parameters(json!({
        "generate_mac": "aa:bb:00:00:00:00",
        "local": "2001:db8::1"
    }));
    let result = params.derived_mac();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
    }
}

#[test]
fn test_no_template_no_derivation() {
    assert_eq!(parameters(json!({})).derived_mac().unwrap(), None);
}
