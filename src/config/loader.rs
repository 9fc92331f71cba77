//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PiiScanConfig;
use super::secret::secret_string;
use crate::domain::errors::PiiScanError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PiiScanConfig
/// 4. Applies environment variable overrides (PIISCAN_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
pub fn load_config(path: impl AsRef<Path>) -> Result<PiiScanConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PiiScanError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PiiScanError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PiiScanConfig = toml::from_str(&contents)
        .map_err(|e| PiiScanError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        PiiScanError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PiiScanError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the PIISCAN_* prefix
///
/// Environment variables follow the pattern PIISCAN_<SECTION>_<KEY>,
/// for example PIISCAN_MODEL_BASE_URL or PIISCAN_OCR_LANGUAGE.
fn apply_env_overrides(config: &mut PiiScanConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("PIISCAN_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Model overrides
    if let Ok(val) = std::env::var("PIISCAN_MODEL_BASE_URL") {
        config.model.base_url = val;
    }
    if let Ok(val) = std::env::var("PIISCAN_MODEL_NAME") {
        config.model.model = val;
    }
    if let Ok(val) = std::env::var("PIISCAN_MODEL_API_KEY") {
        config.model.api_key = secret_string(val);
    }
    if let Ok(val) = std::env::var("PIISCAN_MODEL_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.model.timeout_seconds = timeout;
        }
    }

    // OCR overrides
    if let Ok(val) = std::env::var("PIISCAN_OCR_COMMAND") {
        config.ocr.command = val;
    }
    if let Ok(val) = std::env::var("PIISCAN_OCR_LANGUAGE") {
        config.ocr.language = val;
    }

    // Storage overrides
    if let Ok(val) = std::env::var("PIISCAN_STORAGE_ROOT") {
        config.storage.root = val;
    }

    // Analysis overrides
    if let Ok(val) = std::env::var("PIISCAN_ANALYSIS_REMOTE_FAILURE_CODE") {
        if let Ok(code) = val.parse() {
            config.analysis.remote_failure_code = Some(code);
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PIISCAN_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PIISCAN_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("PIISCAN_TEST_VAR", "test_value");
        let input = "api_key = \"${PIISCAN_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_key = \"test_value\"\n");
        std::env::remove_var("PIISCAN_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("PIISCAN_MISSING_VAR");
        let input = "api_key = \"${PIISCAN_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitution_skips_comments() {
        let input = "# api_key = \"${PIISCAN_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("PIISCAN_COMMENTED_VAR"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[model]
api_key = "test-key"

[ocr]
language = "eng"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.model.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_load_config_missing_api_key_fails_validation() {
        let toml_content = "[model]\n";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(PiiScanError::Configuration(_))));
    }
}
