// SPDX-License-Identifier: Apache-2.0

use serde_json::json;

use super::super::streamline::{to_schema_keys, to_wire_keys};

#[test]
fn test_hyphens_fold_except_interface_names() {
    let value = json!({
        "network": {
            "ethernets": {
                "uplink-0": {
                    "link-local": ["ipv6"],
                    "accept-ra": true
                }
            }
        }
    });
    assert_eq!(
        to_schema_keys(value),
        json!({
            "network": {
                "ethernets": {
                    "uplink-0": {
                        "link_local": ["ipv6"],
                        "accept_ra": true
                    }
                }
            }
        })
    );
}

#[test]
fn test_reserved_word_is_escaped() {
    let value = json!({"from": "10.0.0.0/8"});
    assert_eq!(to_schema_keys(value), json!({"_from": "10.0.0.0/8"}));
}

#[test]
fn test_leading_underscore_is_stripped_on_encode() {
    let value = json!({"_from": "10.0.0.0/8"});
    assert_eq!(to_wire_keys(value), json!({"from": "10.0.0.0/8"}));
}

#[test]
fn test_idempotent_on_normalized_data() {
    let value = json!({
        "network": {
            "bonds": {
                "bond0": {"parameters": {"mii_monitor_interval": 100}}
            }
        }
    });
    assert_eq!(to_schema_keys(value.clone()), value);
    assert_eq!(
        to_schema_keys(to_schema_keys(value.clone())),
        to_schema_keys(value)
    );
}

#[test]
fn test_round_trip_restores_wire_form() {
    let value = json!({
        "network": {
            "vlans": {
                "vlan100": {"link-local": ["ipv4"]}
            }
        }
    });
    assert_eq!(to_wire_keys(to_schema_keys(value.clone())), value);
}

#[test]
fn test_mappings_inside_lists_are_untouched() {
    let value = json!({
        "routes": [{"congestion-window": 10}]
    });
    assert_eq!(
        to_schema_keys(value),
        json!({"routes": [{"congestion-window": 10}]})
    );
}
