// SPDX-License-Identifier: Apache-2.0

//! Key normalization between the two naming conventions a configuration
//! document can arrive in: hyphen-separated words (the netplan style) and
//! the underscore-separated keys the schema declares.
//!
//! Interface names live at nesting level 2 (`network.<kind>.<name>`) and may
//! legitimately contain hyphens, so that level is exempt from separator
//! folding. The key `from` collides with a schema-reserved word and is
//! escaped with a leading underscore; normalizing in the opposite direction
//! strips exactly one leading underscore again.

use serde_json::{Map, Value};

/// Keys that must be escaped with a leading `_` on the way in.
const RESERVED: [&str; 1] = ["from"];

/// Nesting levels whose keys are left untouched by separator folding.
pub(crate) const DEFAULT_IGNORE_LEVELS: [usize; 1] = [2];

fn streamline_key(
    key: &str,
    level: usize,
    old_char: char,
    new_char: char,
    ignore_levels: &[usize],
) -> String {
    if RESERVED.contains(&key) {
        format!("_{key}")
    } else if let Some(stripped) = key.strip_prefix('_') {
        stripped.to_string()
    } else if !ignore_levels.contains(&level) {
        key.replace(old_char, &new_char.to_string())
    } else {
        key.to_string()
    }
}

/// Rewrite every mapping key in `value`, recursing into direct mapping
/// values only. Mappings nested inside lists are deliberately left alone:
/// list items (routes, routing policies, additionals payloads) carry their
/// keys verbatim.
pub(crate) fn streamline_keys(
    value: Value,
    level: usize,
    old_char: char,
    new_char: char,
    ignore_levels: &[usize],
) -> Value {
    match value {
        Value::Object(map) => {
            let mut ret = Map::with_capacity(map.len());
            for (key, val) in map {
                let key = streamline_key(
                    &key, level, old_char, new_char, ignore_levels,
                );
                let val = if val.is_object() {
                    streamline_keys(
                        val,
                        level + 1,
                        old_char,
                        new_char,
                        ignore_levels,
                    )
                } else {
                    val
                };
                ret.insert(key, val);
            }
            Value::Object(ret)
        }
        v => v,
    }
}

/// Document as parsed from YAML to the schema's underscore convention.
pub(crate) fn to_schema_keys(value: Value) -> Value {
    streamline_keys(value, 0, '-', '_', &DEFAULT_IGNORE_LEVELS)
}

/// Schema convention back to the hyphenated wire convention.
pub(crate) fn to_wire_keys(value: Value) -> Value {
    streamline_keys(value, 0, '_', '-', &DEFAULT_IGNORE_LEVELS)
}
