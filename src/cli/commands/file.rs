//! File analysis command implementation
//!
//! Fetches an uploaded file from storage, classifies its MIME type, and
//! routes it into the pipeline as a text file or image.

use super::{build_orchestrator, exit_code_for_status};
use crate::adapters::storage::LocalStorage;
use crate::config::load_config;
use crate::domain::AnalysisInput;
use clap::Args;

/// Arguments for the file command
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Name of the stored file to analyze
    pub name: String,
}

impl FileArgs {
    /// Execute the file command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)?;
        let storage = LocalStorage::new(&config.storage);

        let bytes = storage.fetch(&self.name).await?;
        let mime_type = LocalStorage::mime_type(&self.name, &bytes);
        tracing::info!(name = %self.name, mime_type = %mime_type, "Analyzing stored file");

        let input = if mime_type.contains("text") {
            AnalysisInput::text_file(bytes, mime_type)
        } else if mime_type.starts_with("image/") {
            AnalysisInput::image(bytes, mime_type)
        } else {
            eprintln!("Error: Unsupported file type - {mime_type}");
            return Ok(2);
        };

        let orchestrator = build_orchestrator(&config)?;
        let result = orchestrator.analyze(input).await?;

        println!("{}", result.report);
        Ok(exit_code_for_status(result.status_code))
    }
}
