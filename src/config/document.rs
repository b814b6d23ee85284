//! Configuration document parsing
//!
//! A document is parsed from YAML bytes, flattened into dot-path keys
//! (`a: {b: c}` becomes `a.b = c`), and then discarded. Only nested mappings
//! with scalar leaves are accepted.

use crate::config::ConfigValue;
use crate::types::{ConfigError, Result};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Parse YAML bytes and flatten them into a dot-path keyed value map.
///
/// `asset` is the logical name of the source document, used in error messages.
pub fn flatten_document(asset: &str, bytes: &[u8]) -> Result<BTreeMap<String, ConfigValue>> {
    let root: Value = serde_yaml::from_slice(bytes).map_err(|e| ConfigError::Parse {
        asset: asset.to_string(),
        reason: e.to_string(),
    })?;

    let Value::Mapping(mapping) = root else {
        return Err(parse_error(asset, "top-level value must be a mapping"));
    };

    let mut flat = BTreeMap::new();
    flatten_mapping(asset, "", &mapping, &mut flat)?;
    Ok(flat)
}

fn flatten_mapping(
    asset: &str,
    prefix: &str,
    mapping: &serde_yaml::Mapping,
    out: &mut BTreeMap<String, ConfigValue>,
) -> Result<()> {
    for (key, value) in mapping {
        let Value::String(key) = key else {
            return Err(parse_error(
                asset,
                &format!("mapping key under '{}' is not a string", prefix),
            ));
        };

        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Mapping(nested) => flatten_mapping(asset, &path, nested, out)?,
            Value::String(s) => {
                out.insert(path, ConfigValue::String(s.clone()));
            }
            Value::Number(n) => {
                let value = if let Some(i) = n.as_i64() {
                    ConfigValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    ConfigValue::Float(f)
                } else {
                    return Err(parse_error(
                        asset,
                        &format!("number at '{}' is out of range", path),
                    ));
                };
                out.insert(path, value);
            }
            Value::Bool(b) => {
                out.insert(path, ConfigValue::Bool(*b));
            }
            Value::Null | Value::Sequence(_) | Value::Tagged(_) => {
                return Err(parse_error(
                    asset,
                    &format!("unsupported value at '{}': leaves must be scalars", path),
                ));
            }
        }
    }

    Ok(())
}

fn parse_error(asset: &str, reason: &str) -> ConfigError {
    ConfigError::Parse {
        asset: asset.to_string(),
        reason: reason.to_string(),
    }
}
