//! Configuration management
//!
//! Configuration is loaded from a TOML file with `${VAR}` environment
//! substitution and `PIISCAN_*` override variables, then validated before
//! any collaborator is constructed. The model API key is carried in a
//! [`SecretString`] and injected into the client; no ambient global client
//! and no embedded credential exist anywhere in the crate.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    AnalysisConfig, ApplicationConfig, LoggingConfig, ModelConfig, OcrConfig, PiiScanConfig,
    StorageConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
