// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{ErrorKind, NetplannerError, NetplannerConfig};

const DEFAULT_CONF_DIR: &str = "/etc/netplanner";
const NETPLAN_CONF_DIR: &str = "/etc/netplan";

/// Locates and reads the YAML configuration, either a single file or a
/// directory of fragments. Directory fragments are merged in reverse
/// filename order with earlier (later sorting) values winning on conflict.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    is_netplan: bool,
}

impl ConfigLoader {
    /// Resolve the configuration location. With no explicit path the
    /// default directories are probed in order; falling back to the
    /// netplan directory flags the loader so callers can flip their
    /// output default accordingly.
    pub fn new(config: Option<&Path>) -> Result<Self, NetplannerError> {
        if let Some(path) = config {
            if !path.exists() {
                return Err(NetplannerError::new(
                    ErrorKind::IoError,
                    format!(
                        "Configuration file/directory {} does not exist",
                        path.display()
                    ),
                ));
            }
            return Ok(Self {
                path: path.to_path_buf(),
                is_netplan: false,
            });
        }
        let default_dir = Path::new(DEFAULT_CONF_DIR);
        if default_dir.exists() {
            return Ok(Self {
                path: default_dir.to_path_buf(),
                is_netplan: false,
            });
        }
        let netplan_dir = Path::new(NETPLAN_CONF_DIR);
        if netplan_dir.exists() {
            return Ok(Self {
                path: netplan_dir.to_path_buf(),
                is_netplan: true,
            });
        }
        Err(NetplannerError::new(
            ErrorKind::IoError,
            format!(
                "No configuration file/directory found, tried \
                 [{DEFAULT_CONF_DIR}, {NETPLAN_CONF_DIR}]"
            ),
        ))
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Whether the configuration was found in the netplan directory.
    pub fn is_netplan(&self) -> bool {
        self.is_netplan
    }

    /// Read and merge the raw document tree without decoding it.
    pub fn load_value(&self) -> Result<Value, NetplannerError> {
        if self.path.is_file() {
            return load_file(&self.path);
        }
        let mut files: Vec<PathBuf> = std::fs::read_dir(&self.path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file()
                    && matches!(
                        path.extension().and_then(|e| e.to_str()),
                        Some("yaml") | Some("yml")
                    )
            })
            .collect();
        if files.is_empty() {
            return Err(NetplannerError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Config directory {} holds no YAML files",
                    self.path.display()
                ),
            ));
        }
        files.sort();
        files.reverse();
        let mut merged = Value::Object(serde_json::Map::new());
        for file in files {
            log::debug!("Loading configuration fragment {}", file.display());
            merge_value(&mut merged, load_file(&file)?);
        }
        Ok(merged)
    }

    /// Read, merge and decode into the typed document.
    pub fn load_config(&self) -> Result<NetplannerConfig, NetplannerError> {
        NetplannerConfig::from_value(self.load_value()?)
    }
}

fn load_file(path: &Path) -> Result<Value, NetplannerError> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)
        .map_err(NetplannerError::from)
        .map_err(|e| e.at_path(&path.display().to_string()))?;
    Ok(value)
}

/// Recursive map merge. Keys only present in `other` are adopted;
/// conflicting scalars and lists keep the value already in `base`.
fn merge_value(base: &mut Value, other: Value) {
    if let (Value::Object(base_map), Value::Object(other_map)) = (base, other)
    {
        for (key, val) in other_map {
            match base_map.get_mut(&key) {
                Some(existing) => {
                    if existing.is_object() && val.is_object() {
                        merge_value(existing, val);
                    }
                }
                None => {
                    base_map.insert(key, val);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::merge_value;
    use serde_json::json;

    #[test]
    fn test_merge_earlier_value_wins() {
        let mut base = json!({
            "network": {
                "version": 2,
                "ethernets": {"eth0": {"mtu": 9000}}
            }
        });
        merge_value(
            &mut base,
            json!({
                "network": {
                    "version": 3,
                    "ethernets": {"eth1": {"mtu": 1500}}
                }
            }),
        );
        assert_eq!(
            base,
            json!({
                "network": {
                    "version": 2,
                    "ethernets": {
                        "eth0": {"mtu": 9000},
                        "eth1": {"mtu": 1500}
                    }
                }
            })
        );
    }

    #[test]
    fn test_merge_into_empty() {
        let mut base = json!({});
        merge_value(&mut base, json!({"network": {"version": 2}}));
        assert_eq!(base, json!({"network": {"version": 2}}));
    }
}
