// piiscan - PII Content Analysis Pipeline
// Copyright (c) 2025 piiscan Contributors
// Licensed under the MIT License

//! # piiscan - PII Content Analysis
//!
//! piiscan inspects user-submitted text, text files, and images for
//! personally identifiable information (PII) by combining a local
//! pattern-based scanner with an external generative content-analysis
//! model, then reconciling and formatting the findings.
//!
//! ## Overview
//!
//! The pipeline provides:
//! - **Local scanning** with an ordered regex detector library (email,
//!   card numbers, phone numbers, SSNs, IPv4 addresses)
//! - **Remote analysis** via the Gemini `generateContent` API
//! - **Response normalization** tolerant of format drift in model replies
//! - **Fallback extraction** for images: OCR first, direct visual
//!   analysis when no text is readable
//!
//! ## Architecture
//!
//! piiscan follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`analysis`] - The content-analysis pipeline (scanner, remote
//!   analyzer, normalizer, orchestrator)
//! - [`adapters`] - External integrations (model transport, OCR, storage)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use piiscan::adapters::model::GeminiClient;
//! use piiscan::adapters::ocr::TesseractOcr;
//! use piiscan::analysis::{AnalysisOrchestrator, PatternScanner, RemoteAnalyzer};
//! use piiscan::config::load_config;
//! use piiscan::domain::AnalysisInput;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("piiscan.toml")?;
//!
//!     let client = Arc::new(GeminiClient::new(config.model.clone())?);
//!     let orchestrator = AnalysisOrchestrator::new(
//!         PatternScanner::new()?,
//!         RemoteAnalyzer::new(client),
//!         Arc::new(TesseractOcr::new(&config.ocr)),
//!         &config.analysis,
//!     );
//!
//!     let result = orchestrator
//!         .analyze(AnalysisInput::text("Contact me at a@b.com"))
//!         .await?;
//!
//!     println!("{}", result.report);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`]. A remote analyzer
//! failure never aborts an analysis; the orchestrator substitutes a
//! placeholder finding so callers always receive the local scanner's
//! results at minimum.
//!
//! ## Logging
//!
//! piiscan uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting analysis");
//! warn!(tier = "heuristic", "Structured parse fell through to fallback tier");
//! ```

pub mod adapters;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
