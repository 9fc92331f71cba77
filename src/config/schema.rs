//! Configuration schema types
//!
//! Root structure mapping to the `piiscan.toml` file, with serde defaults
//! so a minimal file only needs the model API key.

use crate::config::secret::{secret_string, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Main piiscan configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct PiiScanConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Generative model endpoint configuration
    pub model: ModelConfig,

    /// OCR engine configuration
    #[serde(default)]
    pub ocr: OcrConfig,

    /// Uploaded-file storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Analysis policy configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PiiScanConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.model.validate()?;
        self.ocr.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Generative model endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the model API
    #[serde(default = "default_model_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model_name")]
    pub model: String,

    /// API key, injected from configuration or environment
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_model_base_url(),
            model: default_model_name(),
            api_key: default_api_key(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ModelConfig {
    fn validate(&self) -> Result<(), String> {
        Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid model.base_url '{}': {}", self.base_url, e))?;
        if self.model.is_empty() {
            return Err("model.model must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("model.timeout_seconds must be greater than zero".to_string());
        }
        use secrecy::ExposeSecret;
        if self.api_key.expose_secret().is_empty() {
            return Err(
                "model.api_key is required (set it in the config file or PIISCAN_MODEL_API_KEY)"
                    .to_string(),
            );
        }
        Ok(())
    }
}

/// OCR engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// OCR command to invoke
    #[serde(default = "default_ocr_command")]
    pub command: String,

    /// Language data to use
    #[serde(default = "default_ocr_language")]
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            command: default_ocr_command(),
            language: default_ocr_language(),
        }
    }
}

impl OcrConfig {
    fn validate(&self) -> Result<(), String> {
        if self.command.is_empty() {
            return Err("ocr.command must not be empty".to_string());
        }
        if self.language.is_empty() {
            return Err("ocr.language must not be empty".to_string());
        }
        Ok(())
    }
}

/// Uploaded-file storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding uploaded files
    #[serde(default = "default_storage_root")]
    pub root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
        }
    }
}

/// Analysis policy configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Status code reported when the remote analyzer fails entirely.
    ///
    /// When unset, a remote failure keeps the path status (0 or 1) and
    /// surfaces only through the placeholder finding; when set, the failure
    /// overrides the status code with this value.
    #[serde(default)]
    pub remote_failure_code: Option<i32>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation ("daily" or "hourly")
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_model_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model_name() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key() -> SecretString {
    secret_string(String::new())
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_ocr_command() -> String {
    "tesseract".to_string()
}

fn default_ocr_language() -> String {
    "eng".to_string()
}

fn default_storage_root() -> String {
    "./uploads".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
