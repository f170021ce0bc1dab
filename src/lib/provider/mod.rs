// SPDX-License-Identifier: Apache-2.0

mod networkd;

pub use self::networkd::{NetworkdProvider, DEFAULT_PATH};
