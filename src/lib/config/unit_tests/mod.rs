// SPDX-License-Identifier: Apache-2.0

mod ip;
mod net_config;
mod route;
mod streamline;
mod topology;
mod types;
mod vxlan;
