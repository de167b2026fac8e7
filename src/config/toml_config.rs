use crate::core::{ConfigProvider, SourceSettings};
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{
    validate_delimiter, validate_non_empty_string, validate_path, validate_required_field,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_ENDPOINT: &str = "https://app.botmock.com/api";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Api,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: SourceKind,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub team_id: Option<String>,
    pub project_id: Option<String>,
    pub board_id: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            r#type: SourceKind::File,
            path: None,
            endpoint: None,
            team_id: None,
            project_id: None,
            board_id: None,
            token: None,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
    pub entity_delimiter: Option<char>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            entity_delimiter: None,
        }
    }
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExportError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("output.dir", &self.output.dir)?;

        if let Some(delimiter) = self.output.entity_delimiter {
            validate_delimiter("output.entity_delimiter", delimiter)?;
        }

        match self.source.r#type {
            SourceKind::File => {
                let path = validate_required_field("source.path", &self.source.path)?;
                validate_path("source.path", path)?;
            }
            SourceKind::Api => {
                validate_url("source.endpoint", self.endpoint())?;
                for (field, value) in [
                    ("source.team_id", &self.source.team_id),
                    ("source.project_id", &self.source.project_id),
                    ("source.board_id", &self.source.board_id),
                    ("source.token", &self.source.token),
                ] {
                    let value = validate_required_field(field, value)?;
                    validate_non_empty_string(field, value)?;
                    if value.starts_with("${") {
                        return Err(ExportError::ConfigValidationError {
                            field: field.to_string(),
                            message: format!("environment variable {} is not set", value),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    pub fn endpoint(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or(DEFAULT_API_ENDPOINT)
    }
}

impl ConfigProvider for TomlConfig {
    fn output_dir(&self) -> &Path {
        Path::new(&self.output.dir)
    }

    fn entity_delimiter(&self) -> char {
        self.output.entity_delimiter.unwrap_or('{')
    }

    fn source(&self) -> Result<SourceSettings> {
        let source = &self.source;
        match source.r#type {
            SourceKind::File => Ok(SourceSettings::File {
                path: PathBuf::from(validate_required_field("source.path", &source.path)?),
            }),
            SourceKind::Api => Ok(SourceSettings::Api {
                endpoint: self.endpoint().trim_end_matches('/').to_string(),
                team_id: validate_required_field("source.team_id", &source.team_id)?.clone(),
                project_id: validate_required_field("source.project_id", &source.project_id)?
                    .clone(),
                board_id: validate_required_field("source.board_id", &source.board_id)?.clone(),
                token: validate_required_field("source.token", &source.token)?.clone(),
                timeout_seconds: source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            }),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_file_source() {
        let toml_content = r#"
[source]
type = "file"
path = "exports/pizza.json"

[output]
dir = "./lg-output"
entity_delimiter = "["
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.output_dir(), Path::new("./lg-output"));
        assert_eq!(config.entity_delimiter(), '[');
        assert_eq!(
            config.source().unwrap(),
            SourceSettings::File {
                path: PathBuf::from("exports/pizza.json")
            }
        );
    }

    #[test]
    fn test_defaults() {
        let config =
            TomlConfig::from_toml_str("[source]\ntype = \"file\"\npath = \"p.json\"\n").unwrap();
        assert_eq!(config.output_dir(), Path::new(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.entity_delimiter(), '{');
        assert_eq!(config.endpoint(), DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FLOW_EXPORT_TEST_TOKEN", "secret-token");

        let toml_content = r#"
[source]
type = "api"
team_id = "team"
project_id = "project"
board_id = "board"
token = "${FLOW_EXPORT_TEST_TOKEN}"
timeout_seconds = 5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.source().unwrap(),
            SourceSettings::Api {
                endpoint: DEFAULT_API_ENDPOINT.to_string(),
                team_id: "team".to_string(),
                project_id: "project".to_string(),
                board_id: "board".to_string(),
                token: "secret-token".to_string(),
                timeout_seconds: 5,
            }
        );

        std::env::remove_var("FLOW_EXPORT_TEST_TOKEN");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[source]
type = "api"
team_id = "team"
project_id = "project"
board_id = "board"
token = "${FLOW_EXPORT_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.source.token.as_deref(),
            Some("${FLOW_EXPORT_SURELY_UNSET_VAR}")
        );
        assert!(matches!(
            config.validate(),
            Err(ExportError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let missing_ids = TomlConfig::from_toml_str(
            "[source]\ntype = \"api\"\nendpoint = \"https://api.example.com\"\n",
        )
        .unwrap();
        assert!(matches!(
            missing_ids.validate(),
            Err(ExportError::MissingConfigError { .. })
        ));

        let bad_endpoint = TomlConfig::from_toml_str(
            "[source]\ntype = \"api\"\nendpoint = \"invalid-url\"\n",
        )
        .unwrap();
        assert!(bad_endpoint.validate().is_err());

        let missing_path = TomlConfig::from_toml_str("[source]\ntype = \"file\"\n").unwrap();
        assert!(missing_path.validate().is_err());

        assert!(TomlConfig::from_toml_str("[source]\ntype = \"ftp\"\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
[source]
type = "file"
path = "bot.json"

[output]
dir = "out"
"#;
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.dir, "out");
    }
}
