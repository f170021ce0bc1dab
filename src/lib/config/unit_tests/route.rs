// SPDX-License-Identifier: Apache-2.0

use serde_json::json;

use super::super::route::Route;
use super::super::routing_policy::RoutingPolicy;
use crate::ErrorKind;

#[test]
fn test_route_needs_on_link_or_gateway() {
    let route: Route = serde_json::from_value(json!({
        "to": "10.0.0.0/8"
    }))
    .unwrap();
    let result = route.validate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
    }
}

#[test]
fn test_route_on_link_without_gateway_is_valid() {
    let route: Route = serde_json::from_value(json!({
        "to": "10.0.0.0/8",
        "on_link": true
    }))
    .unwrap();
    assert!(route.validate().is_ok());
}

#[test]
fn test_route_gateway_without_on_link_is_valid() {
    let route: Route = serde_json::from_value(json!({
        "to": "10.0.0.0/8",
        "via": "192.0.2.1"
    }))
    .unwrap();
    assert!(route.validate().is_ok());
}

#[test]
fn test_route_source_accepts_escaped_key() {
    let route: Route = serde_json::from_value(json!({
        "_from": "192.0.2.0/24",
        "via": "192.0.2.1"
    }))
    .unwrap();
    assert_eq!(route.from.as_ref().map(|f| f.as_str()), Some("192.0.2.0/24"));
}

#[test]
fn test_route_rejects_unknown_field() {
    let result: Result<Route, _> = serde_json::from_value(json!({
        "via": "192.0.2.1",
        "nexthop": "192.0.2.1"
    }));
    assert!(result.is_err());
}

#[test]
fn test_routing_policy_needs_a_selector() {
    let policy: RoutingPolicy = serde_json::from_value(json!({
        "table": 100
    }))
    .unwrap();
    let result = policy.validate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
    }
}

#[test]
fn test_routing_policy_single_selector_is_enough() {
    for selector in [
        json!({"to": "10.0.0.0/8"}),
        json!({"_from": "10.0.0.0/8"}),
        json!({"mark": 7}),
    ] {
        let policy: RoutingPolicy =
            serde_json::from_value(selector).unwrap();
        assert!(policy.validate().is_ok());
    }
}
