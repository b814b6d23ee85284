//! Configuration system for confpack
//!
//! Provides a 2-tier configuration hierarchy:
//! 1. Environment overlay (highest priority)
//! 2. Packaged defaults (lowest priority)

mod assets;
mod document;
mod loader;
mod registry;

pub use assets::{AssetStore, EmbeddedAssets, MemoryAssets};
pub use document::flatten_document;
pub use loader::{load, load_from_env, DEFAULT_ASSET, ENV_VAR};
pub use registry::{ConfigValue, Settings};
