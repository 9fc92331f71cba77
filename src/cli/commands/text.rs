//! Text analysis command implementation

use super::{build_orchestrator, exit_code_for_status};
use crate::config::load_config;
use crate::domain::AnalysisInput;
use clap::Args;

/// Arguments for the text command
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text to analyze
    pub input: String,
}

impl TextArgs {
    /// Execute the text command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(chars = self.input.len(), "Analyzing text input");

        let config = load_config(config_path)?;
        let orchestrator = build_orchestrator(&config)?;

        let result = orchestrator
            .analyze(AnalysisInput::text(self.input.clone()))
            .await?;

        println!("{}", result.report);
        Ok(exit_code_for_status(result.status_code))
    }
}
