//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Model Endpoint: {}", config.model.base_url);
        println!("  Model: {}", config.model.model);
        println!("  Request Timeout: {}s", config.model.timeout_seconds);
        println!("  OCR Command: {}", config.ocr.command);
        println!("  OCR Language: {}", config.ocr.language);
        println!("  Storage Root: {}", config.storage.root);
        match config.analysis.remote_failure_code {
            Some(code) => println!("  Remote Failure Code: {code}"),
            None => println!("  Remote Failure Code: (path status kept)"),
        }
        println!();
        Ok(0)
    }
}
