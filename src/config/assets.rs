//! Packaged asset access
//!
//! Configuration documents are bundled into the binary at build time. The
//! loader only ever asks for "raw bytes by logical name", so that capability
//! is a trait with one method and tests substitute an in-memory store.

use crate::types::{ConfigError, Result};
use include_dir::{include_dir, Dir};
use std::collections::HashMap;

// Embed the configs directory at compile time
static CONFIGS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/configs");

/// Provider of named byte blobs bundled with the program.
pub trait AssetStore {
    /// Fetch the raw bytes of the asset with the given logical name.
    fn fetch(&self, name: &str) -> Result<&[u8]>;
}

/// Asset store backed by the `configs/` directory embedded in the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl AssetStore for EmbeddedAssets {
    fn fetch(&self, name: &str) -> Result<&[u8]> {
        CONFIGS_DIR
            .get_file(name)
            .map(|file| file.contents())
            .ok_or_else(|| ConfigError::AssetNotFound(name.to_string()))
    }
}

/// In-memory asset store for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.files.insert(name.into(), bytes.into());
        self
    }
}

impl AssetStore for MemoryAssets {
    fn fetch(&self, name: &str) -> Result<&[u8]> {
        self.files
            .get(name)
            .map(|bytes| bytes.as_slice())
            .ok_or_else(|| ConfigError::AssetNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_present() {
        let assets = EmbeddedAssets;
        let bytes = assets.fetch("default.yml").expect("default.yml is packaged");
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_embedded_missing_name() {
        let assets = EmbeddedAssets;
        let err = assets.fetch("nope.yml").unwrap_err();
        assert!(matches!(err, ConfigError::AssetNotFound(name) if name == "nope.yml"));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut assets = MemoryAssets::new();
        assets.insert("default.yml", "a: 1");
        assert_eq!(assets.fetch("default.yml").unwrap(), b"a: 1");
        assert!(assets.fetch("prod.yml").is_err());
    }
}
