// SPDX-License-Identifier: Apache-2.0

use super::super::ip::{IpInterfaceAddr, IpNetworkAddr};
use crate::ErrorKind;

#[test]
fn test_interface_addr_bare_address_gets_host_prefix() {
    assert_eq!(
        IpInterfaceAddr::try_from("192.0.2.1".to_string())
            .unwrap()
            .as_str(),
        "192.0.2.1/32"
    );
    assert_eq!(
        IpInterfaceAddr::try_from("2001:db8::1".to_string())
            .unwrap()
            .as_str(),
        "2001:db8::1/128"
    );
}

#[test]
fn test_interface_addr_keeps_host_bits() {
    let addr = IpInterfaceAddr::try_from("192.0.2.1/24".to_string()).unwrap();
    assert_eq!(addr.as_str(), "192.0.2.1/24");
    assert_eq!(addr.prefix(), 24);
}

#[test]
fn test_interface_addr_rejects_bad_prefix() {
    assert!(IpInterfaceAddr::try_from("192.0.2.1/33".to_string()).is_err());
    assert!(IpInterfaceAddr::try_from("2001:db8::1/129".to_string()).is_err());
}

#[test]
fn test_interface_addr_rejects_garbage() {
    let result = IpInterfaceAddr::try_from("192.0.2.1/24/".to_string());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
    }
    assert!(IpInterfaceAddr::try_from("not-an-ip".to_string()).is_err());
}

#[test]
fn test_network_addr_accepts_network_address() {
    assert_eq!(
        IpNetworkAddr::try_from("192.0.2.0/24".to_string())
            .unwrap()
            .as_str(),
        "192.0.2.0/24"
    );
    assert_eq!(
        IpNetworkAddr::try_from("::/0".to_string()).unwrap().as_str(),
        "::/0"
    );
}

#[test]
fn test_network_addr_rejects_host_bits() {
    let result = IpNetworkAddr::try_from("192.0.2.1/24".to_string());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ValidationError);
        assert!(e.msg().contains("host bits"));
    }
}
