// src/config/mod.rs
// Service configuration: .env file, environment variables, then defaults

use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{HelperError, Result};
use crate::llm::ModelProfile;
use crate::tools::quiz::QuizValidation;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct HelperConfig {
    // ── Gemini Configuration
    pub google_api_key: Option<String>,
    pub gemini_base_url: String,
    pub general_model: String,
    pub general_temperature: f32,
    pub tool_model: String,
    pub tool_temperature: f32,
    pub llm_timeout_secs: u64,

    // ── Tool Behaviour
    pub strict_quiz: bool,

    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => {
                    debug!("Config: {} = {} (from environment)", key, clean_val);
                    parsed
                }
                Err(_) => {
                    warn!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

fn env_secret(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|val| val.trim().to_string())
        .find(|val| !val.is_empty())
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            general_model: "gemini-1.5-flash".to_string(),
            general_temperature: 0.7,
            tool_model: "gemini-1.5-pro".to_string(),
            tool_temperature: 0.5,
            llm_timeout_secs: 60,
            strict_quiz: true,
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origin: "*".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl HelperConfig {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            google_api_key: env_secret(&["GOOGLE_API_KEY", "GEMINI_API_KEY"]),
            gemini_base_url: env_var_or("GEMINI_BASE_URL", defaults.gemini_base_url),
            general_model: env_var_or("STUDY_GENERAL_MODEL", defaults.general_model),
            general_temperature: env_var_or("STUDY_GENERAL_TEMPERATURE", defaults.general_temperature),
            tool_model: env_var_or("STUDY_TOOL_MODEL", defaults.tool_model),
            tool_temperature: env_var_or("STUDY_TOOL_TEMPERATURE", defaults.tool_temperature),
            llm_timeout_secs: env_var_or("STUDY_LLM_TIMEOUT", defaults.llm_timeout_secs),
            strict_quiz: env_var_or("STUDY_STRICT_QUIZ", defaults.strict_quiz),
            host: env_var_or("STUDY_HOST", defaults.host),
            port: env_var_or("STUDY_PORT", defaults.port),
            cors_origin: env_var_or("STUDY_CORS_ORIGIN", defaults.cors_origin),
            log_level: env_var_or("LOG_LEVEL", defaults.log_level),
        }
    }

    /// Check the settings needed to run the server
    pub fn validate(&self) -> Result<()> {
        if self.google_api_key.is_none() {
            return Err(HelperError::Config(
                "GOOGLE_API_KEY (or GEMINI_API_KEY) must be set".to_string(),
            ));
        }
        if self.llm_timeout_secs == 0 {
            return Err(HelperError::Config("STUDY_LLM_TIMEOUT must be at least 1 second".to_string()));
        }
        for (name, temp) in [
            ("STUDY_GENERAL_TEMPERATURE", self.general_temperature),
            ("STUDY_TOOL_TEMPERATURE", self.tool_temperature),
        ] {
            if !(0.0..=2.0).contains(&temp) {
                return Err(HelperError::Config(format!("{} must be between 0.0 and 2.0", name)));
            }
        }
        Ok(())
    }

    pub fn general_profile(&self) -> ModelProfile {
        ModelProfile::new(&self.general_model, self.general_temperature)
    }

    pub fn tool_profile(&self) -> ModelProfile {
        ModelProfile::new(&self.tool_model, self.tool_temperature)
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    pub fn quiz_validation(&self) -> QuizValidation {
        if self.strict_quiz {
            QuizValidation::Strict
        } else {
            QuizValidation::Lenient
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> HelperConfig {
        HelperConfig {
            google_api_key: Some("test-key".to_string()),
            ..HelperConfig::default()
        }
    }

    #[test]
    fn test_defaults_match_profiles() {
        let config = HelperConfig::default();
        let general = config.general_profile();
        let tool = config.tool_profile();
        assert_eq!(general.model, "gemini-1.5-flash");
        assert!((general.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(tool.model, "gemini-1.5-pro");
        assert!((tool.temperature - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.quiz_validation(), QuizValidation::Strict);
        assert_eq!(config.llm_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_validate_requires_api_key() {
        let err = HelperConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_timeout = HelperConfig { llm_timeout_secs: 0, ..configured() };
        assert!(zero_timeout.validate().is_err());

        let hot = HelperConfig { tool_temperature: 3.5, ..configured() };
        assert!(hot.validate().unwrap_err().to_string().contains("STUDY_TOOL_TEMPERATURE"));
    }

    #[test]
    fn test_lenient_quiz_and_bind_address() {
        let config = HelperConfig {
            strict_quiz: false,
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..configured()
        };
        assert_eq!(config.quiz_validation(), QuizValidation::Lenient);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_var_or_falls_back_when_missing() {
        let value: u16 = env_var_or("STUDY_BUDDY_SURELY_UNSET_VAR", 42);
        assert_eq!(value, 42);
    }
}
