//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for piiscan using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// piiscan - PII content analysis
#[derive(Parser, Debug)]
#[command(name = "piiscan")]
#[command(version, about, long_about = None)]
#[command(author = "piiscan Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "piiscan.toml", env = "PIISCAN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PIISCAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze raw text for sensitive information
    Text(commands::text::TextArgs),

    /// Analyze a stored file (text or image) for sensitive information
    File(commands::file::FileArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
