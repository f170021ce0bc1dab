// SPDX-License-Identifier: Apache-2.0

use super::super::types::{
    InterfaceName, MacAddress, Mtu, PositiveInt, TableShortInt,
    UnsignedShortInt, Version, VirtualFunctionCount, VlanId,
};
use crate::ErrorKind;

#[test]
fn test_interface_name_max_length() {
    assert!(InterfaceName::try_from("a".repeat(15)).is_ok());
    let result = InterfaceName::try_from("a".repeat(16));
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
    }
}

#[test]
fn test_interface_name_rejects_non_ascii() {
    assert!(InterfaceName::try_from("eth\u{00e9}".to_string()).is_err());
}

#[test]
fn test_interface_name_allows_hyphen() {
    assert!(InterfaceName::try_from("uplink-0".to_string()).is_ok());
}

#[test]
fn test_mac_address_round_trip() {
    let mac = MacAddress::try_from("52:54:00:12:34:56".to_string()).unwrap();
    assert_eq!(mac.as_str(), "52:54:00:12:34:56");
}

#[test]
fn test_mac_address_rejects_upper_case() {
    assert!(MacAddress::try_from("52:54:00:12:34:AB".to_string()).is_err());
}

#[test]
fn test_mac_address_rejects_wrong_length() {
    assert!(MacAddress::try_from("52:54:00:12:34".to_string()).is_err());
    assert!(
        MacAddress::try_from("52:54:00:12:34:56:78".to_string()).is_err()
    );
}

#[test]
fn test_mac_address_octets_round_trip() {
    let mac = MacAddress::try_from("0a:1b:2c:3d:4e:5f".to_string()).unwrap();
    assert_eq!(mac.octets(), [0x0a, 0x1b, 0x2c, 0x3d, 0x4e, 0x5f]);
    assert_eq!(MacAddress::from_octets(mac.octets()), mac);
}

#[test]
fn test_mtu_bounds() {
    assert_eq!(Mtu::try_from(1280u64).unwrap().value(), 1280);
    assert_eq!(Mtu::try_from(9166u64).unwrap().value(), 9166);
    assert!(Mtu::try_from(1279u64).is_err());
    assert!(Mtu::try_from(9167u64).is_err());
}

#[test]
fn test_positive_int_rejects_zero_and_negative() {
    assert!(PositiveInt::try_from(0i64).is_err());
    assert!(PositiveInt::try_from(-1i64).is_err());
    assert_eq!(PositiveInt::try_from(100i64).unwrap().value(), 100);
}

#[test]
fn test_unsigned_short_int_bounds() {
    assert_eq!(UnsignedShortInt::try_from(255i64).unwrap().value(), 255);
    assert!(UnsignedShortInt::try_from(256i64).is_err());
    assert!(UnsignedShortInt::try_from(0i64).is_err());
}

#[test]
fn test_table_rejects_reserved() {
    for table in [0i64, 253, 254, 255] {
        let result = TableShortInt::try_from(table);
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::ValidationError);
            assert!(e.msg().contains("reserved"));
        }
    }
}

#[test]
fn test_table_range_applies_after_reserved() {
    assert_eq!(TableShortInt::try_from(100i64).unwrap().value(), 100);
    assert!(TableShortInt::try_from(256i64).is_err());
}

#[test]
fn test_vlan_id_bounds() {
    assert_eq!(VlanId::try_from(2i64).unwrap().value(), 2);
    assert_eq!(VlanId::try_from(4094i64).unwrap().value(), 4094);
    assert!(VlanId::try_from(1i64).is_err());
    assert!(VlanId::try_from(4095i64).is_err());
    assert!(VlanId::try_from(4096i64).is_err());
    assert!(VlanId::try_from(-1i64).is_err());
}

#[test]
fn test_vlan_id_zero_is_unset_sentinel() {
    let id = VlanId::try_from(0i64).unwrap();
    assert!(id.is_unset());
    assert!(!VlanId::try_from(100i64).unwrap().is_unset());
}

#[test]
fn test_virtual_function_count_bounds() {
    assert_eq!(VirtualFunctionCount::try_from(0i64).unwrap().value(), 0);
    assert_eq!(
        VirtualFunctionCount::try_from(255i64).unwrap().value(),
        255
    );
    assert!(VirtualFunctionCount::try_from(256i64).is_err());
}

#[test]
fn test_version_only_two_and_three() {
    assert_eq!(Version::try_from(2u64).unwrap(), Version::Second);
    assert_eq!(Version::try_from(3u64).unwrap(), Version::Third);
    assert!(Version::try_from(1u64).is_err());
    assert!(Version::try_from(4u64).is_err());
}
