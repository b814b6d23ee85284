//! Confpack - layered configuration bootstrap
//!
//! This crate loads a packaged default configuration, applies it as
//! lowest-precedence defaults into a settings registry, and optionally merges
//! an environment-specific overlay document selected by the `APP_ENV`
//! variable. Configuration documents are embedded in the binary at build time.

pub mod config;
pub mod types;

pub use config::{load, load_from_env, AssetStore, ConfigValue, EmbeddedAssets, Settings};
pub use types::ConfigError;
