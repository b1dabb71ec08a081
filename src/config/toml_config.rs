use crate::domain::model::SourceFormat;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Optional settings file. Command line flags take precedence.
///
/// ```toml
/// [source]
/// format = "auto"
///
/// [review]
/// url = "${REVIEW_APP_URL}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceSettings>,
    pub review: Option<ReviewSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSettings {
    pub format: Option<SourceFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSettings {
    pub url: Option<String>,
}

impl TomlConfig {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitutes `${VAR}` references from the environment. Unset variables
    /// are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn source_format(&self) -> Option<SourceFormat> {
        self.source.as_ref().and_then(|s| s.format)
    }

    pub fn review_url(&self) -> Option<&str> {
        self.review.as_ref().and_then(|r| r.url.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = self.review_url() {
            validate_url("review.url", url)?;
        }
        Ok(())
    }
}
