//! Configuration loader with 2-tier precedence
//!
//! Priority order (highest to lowest):
//! 1. Environment overlay (`<env>.yml`, selected by APP_ENV)
//! 2. Packaged defaults (`default.yml`, embedded at build time)
//!
//! Loading happens once, synchronously, at process startup, strictly before
//! any reads. Any failure is surfaced to the caller; there is no local
//! recovery, since running with a partially populated registry is worse than
//! not starting.

use crate::config::{flatten_document, AssetStore, Settings};
use crate::types::Result;
use tracing::{debug, info};

/// Logical name of the packaged default document. Must always exist.
pub const DEFAULT_ASSET: &str = "default.yml";

/// Environment variable naming the overlay document to apply.
pub const ENV_VAR: &str = "APP_ENV";

/// Load settings from the given asset store and environment selector.
///
/// Defaults from `default.yml` are applied key by key into the default tier,
/// so a later overlay (or a manual override) always wins. If `selector` is
/// non-empty, `<selector>.yml` must exist and is merged wholesale into the
/// override tier. Pure function of its inputs; the process environment is
/// only consulted by [`load_from_env`].
pub fn load(assets: &dyn AssetStore, selector: Option<&str>) -> Result<Settings> {
    let bytes = assets.fetch(DEFAULT_ASSET)?;
    let defaults = flatten_document(DEFAULT_ASSET, bytes)?;
    info!("Loaded {} default settings from {}", defaults.len(), DEFAULT_ASSET);

    let mut settings = Settings::new();
    for (key, value) in defaults {
        settings.set_default(key, value);
    }

    match selector.filter(|s| !s.is_empty()) {
        Some(env) => {
            let asset = format!("{}.yml", env);
            let bytes = assets.fetch(&asset)?;
            let overlay = flatten_document(&asset, bytes)?;
            info!("Merging {} overrides from {}", overlay.len(), asset);
            settings.merge_overrides(overlay)?;
        }
        None => {
            debug!("No environment selector set, skipping overlay");
        }
    }

    Ok(settings)
}

/// Load settings using the `APP_ENV` environment variable as selector.
///
/// An unset variable is treated the same as an empty one: no overlay.
pub fn load_from_env(assets: &dyn AssetStore) -> Result<Settings> {
    let selector = std::env::var(ENV_VAR).ok();
    load(assets, selector.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryAssets;
    use crate::types::ConfigError;

    const DEFAULT_DOC: &str = "db:\n  uri: localhost\n  poolSize: 10\n";
    const PROD_DOC: &str = "db:\n  uri: prod-host\n";

    fn assets() -> MemoryAssets {
        let mut assets = MemoryAssets::new();
        assets.insert("default.yml", DEFAULT_DOC);
        assets.insert("prod.yml", PROD_DOC);
        assets
    }

    #[test]
    fn test_defaults_only() {
        let settings = load(&assets(), None).unwrap();
        assert_eq!(settings.get_string("db.uri"), "localhost");
        assert_eq!(settings.get_string("db.poolSize"), "10");
    }

    #[test]
    fn test_empty_selector_skips_overlay() {
        let settings = load(&assets(), Some("")).unwrap();
        assert_eq!(settings.get_string("db.uri"), "localhost");
    }

    #[test]
    fn test_overlay_wins_unaffected_keys_fall_through() {
        let settings = load(&assets(), Some("prod")).unwrap();
        assert_eq!(settings.get_string("db.uri"), "prod-host");
        assert_eq!(settings.get_string("db.poolSize"), "10");
    }

    #[test]
    fn test_overlay_only_key() {
        let mut assets = assets();
        assets.insert("staging.yml", "db:\n  uri: stage-host\nfeature:\n  beta: true\n");
        let settings = load(&assets, Some("staging")).unwrap();
        assert!(settings.get_bool("feature.beta"));
        assert_eq!(settings.get_string("db.uri"), "stage-host");
    }

    #[test]
    fn test_missing_overlay_is_fatal() {
        let err = load(&assets(), Some("staging")).unwrap_err();
        assert!(matches!(err, ConfigError::AssetNotFound(name) if name == "staging.yml"));
    }

    #[test]
    fn test_missing_default_is_fatal() {
        let err = load(&MemoryAssets::new(), None).unwrap_err();
        assert!(matches!(err, ConfigError::AssetNotFound(name) if name == "default.yml"));
    }

    #[test]
    fn test_malformed_default_aborts_before_overlay() {
        let mut assets = MemoryAssets::new();
        assets.insert("default.yml", "db: [unclosed");
        assets.insert("prod.yml", PROD_DOC);
        let err = load(&assets, Some("prod")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref asset, .. } if asset == "default.yml"));
    }

    #[test]
    fn test_malformed_overlay_is_fatal() {
        let mut assets = assets();
        assets.insert("bad.yml", "a: [1,");
        let err = load(&assets, Some("bad")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref asset, .. } if asset == "bad.yml"));
    }

    #[test]
    fn test_overlay_type_conflict_is_fatal() {
        let mut assets = assets();
        assets.insert("weird.yml", "db:\n  poolSize: lots\n");
        let err = load(&assets, Some("weird")).unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { ref key, .. } if key == "db.poolSize"));
    }

    #[test]
    fn test_load_is_idempotent() {
        let assets = assets();
        let first = load(&assets, Some("prod")).unwrap();
        let second = load(&assets, Some("prod")).unwrap();
        assert_eq!(first, second);
    }
}
