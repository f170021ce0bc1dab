// SPDX-License-Identifier: Apache-2.0

//! SR-IOV physical function setup through sysfs and devlink. Applies the
//! `virtual_function_count` and `embedded_switch_mode` fields of ethernet
//! entries to the running kernel.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{Ethernet, InterfaceName, NetplannerConfig};
use crate::{ErrorKind, NetplannerError};

const SYS_CLASS_NET: &str = "/sys/class/net";
const SYS_PCI_DEVICES: &str = "/sys/bus/pci/devices";

/// Snapshot of one kernel network device backed by a PCI device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PciNetDevice {
    pub interface_name: String,
    pub pci_address: String,
    pub mac_address: String,
    /// Total VF capacity, present only on SR-IOV capable devices.
    pub sriov_totalvfs: Option<u16>,
    pub sriov_numvfs: Option<u16>,
}

impl PciNetDevice {
    pub fn is_sriov(&self) -> bool {
        self.sriov_totalvfs.is_some()
    }
}

/// Locates physical functions and writes their SR-IOV attributes.
#[derive(Debug, Clone)]
pub struct SriovManager {
    sys_class_net: PathBuf,
    sys_pci_devices: PathBuf,
}

impl Default for SriovManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SriovManager {
    pub fn new() -> Self {
        Self {
            sys_class_net: PathBuf::from(SYS_CLASS_NET),
            sys_pci_devices: PathBuf::from(SYS_PCI_DEVICES),
        }
    }

    /// Alternative sysfs roots, for tests.
    pub fn with_roots(sys_class_net: &Path, sys_pci_devices: &Path) -> Self {
        Self {
            sys_class_net: sys_class_net.to_path_buf(),
            sys_pci_devices: sys_pci_devices.to_path_buf(),
        }
    }

    /// Catalog every PCI-backed network device currently registered.
    pub fn scan(&self) -> Result<Vec<PciNetDevice>, NetplannerError> {
        let mut ret = Vec::new();
        for entry in std::fs::read_dir(&self.sys_class_net)? {
            let entry = entry?;
            let sysdir = entry.path();
            let device_link = sysdir.join("device");
            if !device_link.is_symlink() {
                continue;
            }
            let resolved = std::fs::canonicalize(&device_link)?;
            let Some(pci_address) = pci_address_of(&resolved) else {
                continue;
            };
            let interface_name =
                entry.file_name().to_string_lossy().to_string();
            let mac_address = read_trimmed(&sysdir.join("address"))?;
            let totalvfs_path = device_link.join("sriov_totalvfs");
            let (sriov_totalvfs, sriov_numvfs) = if totalvfs_path.exists() {
                (
                    Some(read_u16(&totalvfs_path)?),
                    Some(read_u16(&device_link.join("sriov_numvfs"))?),
                )
            } else {
                (None, None)
            };
            ret.push(PciNetDevice {
                interface_name,
                pci_address,
                mac_address,
                sriov_totalvfs,
                sriov_numvfs,
            });
        }
        Ok(ret)
    }

    /// Apply VF counts and switch modes for every ethernet entry carrying
    /// them. Devices that cannot be located or are not SR-IOV capable are
    /// logged and skipped.
    pub fn apply(
        &self,
        config: &NetplannerConfig,
    ) -> Result<(), NetplannerError> {
        let devices = self.scan()?;
        log::info!(
            "Found PCI network devices: {:?}",
            devices
                .iter()
                .map(|d| d.interface_name.as_str())
                .collect::<Vec<&str>>()
        );
        for (name, ethernet) in config.network.ethernets.iter() {
            let Some(requested) = ethernet.virtual_function_count else {
                continue;
            };
            let Some(device) = find_device(&devices, name, ethernet) else {
                log::warn!("No PCI device found for interface {name}");
                continue;
            };
            if !device.is_sriov() {
                log::warn!(
                    "Interface {} is not SR-IOV capable",
                    device.interface_name
                );
                continue;
            }
            let mut count = requested.value();
            if let Some(totalvfs) = device.sriov_totalvfs {
                if count > totalvfs {
                    log::warn!(
                        "Requested value for sriov_numvfs ({count}) too \
                         high for interface {}. Falling back to interface \
                         totalvfs value: {totalvfs}",
                        device.interface_name
                    );
                    count = totalvfs;
                }
            }
            log::info!(
                "Configuring SR-IOV device {} with {count} VF's",
                device.interface_name
            );
            self.set_numvfs(device, count)?;
            if let Some(mode) = ethernet.embedded_switch_mode {
                devlink_eswitch_set(&device.pci_address, mode.as_str())?;
            }
            if ethernet.delay_virtual_functions_rebind {
                log::info!(
                    "Delaying VF rebind for {}",
                    device.interface_name
                );
            } else {
                self.rebind(std::slice::from_ref(&device.pci_address))?;
            }
        }
        Ok(())
    }

    /// Re-attach the VF drivers of the given physical functions. Run after
    /// a switch mode change has settled.
    pub fn rebind(
        &self,
        pci_addresses: &[String],
    ) -> Result<(), NetplannerError> {
        for pf in pci_addresses {
            let pf_dir = self.sys_pci_devices.join(pf);
            if !pf_dir.exists() {
                return Err(NetplannerError::new(
                    ErrorKind::InvalidArgument,
                    format!("PCI device {pf} does not exist"),
                ));
            }
            for entry in std::fs::read_dir(&pf_dir)? {
                let entry = entry?;
                if !entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with("virtfn")
                {
                    continue;
                }
                let resolved = std::fs::canonicalize(entry.path())?;
                let Some(vf_address) = pci_address_of(&resolved) else {
                    continue;
                };
                let driver = resolved.join("driver");
                if driver.exists() {
                    log::info!("Rebinding VF {vf_address}");
                    std::fs::write(driver.join("unbind"), &vf_address)?;
                    std::fs::write(driver.join("bind"), &vf_address)?;
                } else {
                    // Never bound, let the kernel pick a driver.
                    log::info!("Probing driver for VF {vf_address}");
                    std::fs::write(
                        self.sys_pci_devices
                            .parent()
                            .unwrap_or(Path::new("/sys/bus/pci"))
                            .join("drivers_probe"),
                        &vf_address,
                    )?;
                }
            }
        }
        Ok(())
    }

    // Runtime change of sriov_numvfs is disallowed without resetting to 0
    // first.
    fn set_numvfs(
        &self,
        device: &PciNetDevice,
        count: u16,
    ) -> Result<(), NetplannerError> {
        if device.sriov_numvfs == Some(count) {
            return Ok(());
        }
        let path = self
            .sys_class_net
            .join(&device.interface_name)
            .join("device")
            .join("sriov_numvfs");
        std::fs::write(&path, "0")?;
        std::fs::write(&path, count.to_string())?;
        Ok(())
    }
}

fn find_device<'a>(
    devices: &'a [PciNetDevice],
    name: &InterfaceName,
    ethernet: &Ethernet,
) -> Option<&'a PciNetDevice> {
    if let Some(m) = ethernet.r#match.as_ref() {
        if let Some(mac) = m.macaddress.as_ref() {
            return devices.iter().find(|d| d.mac_address == mac.as_str());
        }
        if let Some(pci) = m.pciaddress.as_ref() {
            return devices.iter().find(|d| &d.pci_address == pci);
        }
    }
    devices.iter().find(|d| d.interface_name == name.as_str())
}

/// Last path component of the resolved device directory, skipping a
/// trailing virtio function directory.
fn pci_address_of(resolved: &Path) -> Option<String> {
    let mut parts = resolved
        .components()
        .rev()
        .map(|c| c.as_os_str().to_string_lossy().to_string());
    let last = parts.next()?;
    if last.contains("virtio") {
        parts.next()
    } else {
        Some(last)
    }
}

fn devlink_eswitch_set(
    pci_address: &str,
    mode: &str,
) -> Result<(), NetplannerError> {
    let device = format!("pci/{pci_address}");
    log::info!("Setting eswitch mode {mode} on {device}");
    let output = Command::new("/usr/bin/env")
        .args(["devlink", "dev", "eswitch", "set", &device, "mode", mode])
        .output()
        .map_err(|e| {
            NetplannerError::new(
                ErrorKind::IoError,
                format!("Failed to run devlink: {e}"),
            )
        })?;
    if !output.status.success() {
        return Err(NetplannerError::new(
            ErrorKind::IoError,
            format!(
                "devlink dev eswitch set {device} mode {mode} failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ),
        ));
    }
    Ok(())
}

fn read_trimmed(path: &Path) -> Result<String, NetplannerError> {
    Ok(std::fs::read_to_string(path)?.trim().to_string())
}

fn read_u16(path: &Path) -> Result<u16, NetplannerError> {
    let content = read_trimmed(path)?;
    content.parse().map_err(|e| {
        NetplannerError::new(
            ErrorKind::IoError,
            format!("Malformed value '{content}' in {}: {e}", path.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::pci_address_of;
    use std::path::Path;

    #[test]
    fn test_pci_address_from_device_path() {
        assert_eq!(
            pci_address_of(Path::new(
                "/sys/devices/pci0000:00/0000:00:1f.6"
            )),
            Some("0000:00:1f.6".to_string())
        );
        assert_eq!(
            pci_address_of(Path::new(
                "/sys/devices/pci0000:00/0000:00:04.0/virtio1"
            )),
            Some("0000:00:04.0".to_string())
        );
    }
}
