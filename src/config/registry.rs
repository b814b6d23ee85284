//! Two-tier settings registry
//!
//! Holds a *default* layer and an *override* layer per dot-path key. Lookup
//! resolution: override if present, else default, else the type's zero value.
//! Reads never fail and never block.

use crate::types::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A scalar configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ConfigValue {
    /// Scalar kind name, used in type-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Int(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Bool(_) => "boolean",
        }
    }

    /// Render as a string. Numbers and booleans coerce to their text form.
    pub fn as_string(&self) -> String {
        match self {
            ConfigValue::String(s) => s.clone(),
            ConfigValue::Int(i) => i.to_string(),
            ConfigValue::Float(f) => f.to_string(),
            ConfigValue::Bool(b) => b.to_string(),
        }
    }

    /// Coerce to an integer. Numeric strings parse; anything else is 0.
    pub fn as_int(&self) -> i64 {
        match self {
            ConfigValue::Int(i) => *i,
            ConfigValue::Float(f) => *f as i64,
            ConfigValue::String(s) => s.parse().unwrap_or(0),
            ConfigValue::Bool(b) => *b as i64,
        }
    }

    /// Coerce to a float. Numeric strings parse; anything else is 0.0.
    pub fn as_float(&self) -> f64 {
        match self {
            ConfigValue::Float(f) => *f,
            ConfigValue::Int(i) => *i as f64,
            ConfigValue::String(s) => s.parse().unwrap_or(0.0),
            ConfigValue::Bool(b) => *b as i64 as f64,
        }
    }

    /// Coerce to a boolean. Accepts "true"/"1" strings and non-zero numbers.
    pub fn as_bool(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Int(i) => *i != 0,
            ConfigValue::Float(f) => *f != 0.0,
            ConfigValue::String(s) => matches!(s.as_str(), "true" | "1"),
        }
    }
}

/// Process-wide settings, constructed once at startup and passed by reference
/// to whatever needs it. Writes complete before any reads happen, so no
/// locking is performed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Settings {
    defaults: HashMap<String, ConfigValue>,
    overrides: HashMap<String, ConfigValue>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a default-tier value. Only takes effect for a key with no override.
    pub fn set_default(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.defaults.insert(key.into(), value);
    }

    /// Set an override-tier value for a single key. Outranks any default.
    pub fn set(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.overrides.insert(key.into(), value);
    }

    /// Merge a flattened overlay document into the override tier.
    ///
    /// Every overlay key becomes authoritative; keys absent from the overlay
    /// keep their default. An overlay value whose scalar kind conflicts with
    /// the default's kind at the same key is rejected rather than coerced.
    pub fn merge_overrides(&mut self, overlay: BTreeMap<String, ConfigValue>) -> Result<()> {
        for (key, value) in &overlay {
            if let Some(default) = self.defaults.get(key) {
                if std::mem::discriminant(default) != std::mem::discriminant(value) {
                    return Err(ConfigError::TypeMismatch {
                        key: key.clone(),
                        expected: default.kind(),
                        found: value.kind(),
                    });
                }
            }
        }

        for (key, value) in overlay {
            debug!("Override: {} = {:?}", key, value);
            self.overrides.insert(key, value);
        }

        Ok(())
    }

    /// Whether any tier holds a value for the key.
    pub fn is_set(&self, key: &str) -> bool {
        self.overrides.contains_key(key) || self.defaults.contains_key(key)
    }

    fn resolve(&self, key: &str) -> Option<&ConfigValue> {
        self.overrides.get(key).or_else(|| self.defaults.get(key))
    }

    pub fn get_string(&self, key: &str) -> String {
        self.resolve(key).map(ConfigValue::as_string).unwrap_or_default()
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.resolve(key).map(ConfigValue::as_int).unwrap_or_default()
    }

    pub fn get_float(&self, key: &str) -> f64 {
        self.resolve(key).map(ConfigValue::as_float).unwrap_or_default()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.resolve(key).map(ConfigValue::as_bool).unwrap_or_default()
    }
}
