use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Packaged asset not found: {0}")]
    AssetNotFound(String),

    #[error("Failed to parse {asset}: {reason}")]
    Parse { asset: String, reason: String },

    #[error("Type mismatch for key '{key}': default is {expected}, overlay is {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
