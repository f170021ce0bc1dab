// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use super::ip::IpNetworkAddr;
use super::types::{PositiveInt, TableShortInt, UnsignedShortInt};
use crate::{ErrorKind, NetplannerError};

/// Policy routing rule (`ip rule`) attached to an interface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct RoutingPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        rename = "from",
        alias = "_from",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<IpNetworkAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<IpNetworkAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableShortInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PositiveInt>,
    /// Firewall mark to match on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark: Option<PositiveInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_of_service: Option<UnsignedShortInt>,
}

impl RoutingPolicy {
    /// A rule matching nothing is meaningless: at least one of the
    /// from/to/mark selectors must be present.
    pub fn validate(&self) -> Result<(), NetplannerError> {
        if self.from.is_none() && self.to.is_none() && self.mark.is_none() {
            return Err(NetplannerError::new(
                ErrorKind::ValidationError,
                "RoutingPolicy needs at least one of from, to or mark"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
