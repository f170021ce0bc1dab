// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::ip::IpNetworkAddr;
use super::types::{Mtu, PositiveInt, RouteScope, RouteType, TableShortInt};
use crate::{ErrorKind, NetplannerError};

/// A single kernel route attached to an interface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Source prefix this route applies to.
    #[serde(
        default,
        rename = "from",
        alias = "_from",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<IpNetworkAddr>,
    /// Destination prefix. Absent means the default route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<IpNetworkAddr>,
    /// Next hop gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<IpAddr>,
    /// Next hop is directly attached, no gateway needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_link: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableShortInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<RouteScope>,
    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none"
    )]
    pub route_type: Option<RouteType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<Mtu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion_window: Option<PositiveInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertised_receive_window: Option<PositiveInt>,
}

impl Route {
    /// Synthetic default route materialized by a `gateway4`/`gateway6`
    /// shortcut field.
    pub(crate) fn default_gateway(via: IpAddr, origin: &str) -> Self {
        Self {
            description: Some(format!("Default gateway set by {origin}")),
            via: Some(via),
            ..Default::default()
        }
    }

    /// A route needs a reachable next hop: either it is flagged on-link or
    /// it names a gateway.
    pub fn validate(&self) -> Result<(), NetplannerError> {
        if self.on_link != Some(true) && self.via.is_none() {
            return Err(NetplannerError::new(
                ErrorKind::ValidationError,
                format!(
                    "Route OnLink={:?} or Gateway={:?} need to be specified",
                    self.on_link, self.via
                ),
            ));
        }
        Ok(())
    }
}
