//! Configuration file support for rebuild-console.
//!
//! Provides YAML-based configuration through `rebuild-console.config.yml`
//! files, and merges it with command-line flags and the environment.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::application::factories::RendererType;
use crate::rebuild_tracking::domain::DEFAULT_PER_PAGE;
use crate::shared::error::ConsoleError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "rebuild-console.config.yml";
pub const SERVER_ENV: &str = "REBUILD_CONSOLE_SERVER";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server_url: Option<String>,
    pub per_page: Option<u32>,
    /// Request timeout. Requests never time out when absent.
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.per_page == Some(0) {
        bail!(
            "Invalid config: per_page must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default of {} rows per page.",
            DEFAULT_PER_PAGE
        );
    }
    if let Some(ref url) = config.server_url {
        validate_server_url(url)?;
    }
    if let Some(ref format) = config.format {
        format
            .parse::<RendererType>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Checks that `url` is an absolute http(s) URL and strips trailing slashes.
pub fn validate_server_url(url: &str) -> Result<String> {
    let invalid = |reason: &str| ConsoleError::InvalidServerUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };
    let parsed = reqwest::Url::parse(url.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(&format!("unsupported scheme '{}'", parsed.scheme())).into());
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host").into());
    }
    Ok(url.trim().trim_end_matches('/').to_string())
}

/// Values given on the command line. `None` means not given.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub server_url: Option<String>,
    pub per_page: Option<u32>,
    pub format: Option<RendererType>,
}

/// Effective settings of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server_url: String,
    pub per_page: u32,
    pub timeout: Option<Duration>,
    pub log_level: Option<String>,
    pub format: RendererType,
}

impl Settings {
    /// Merges the sources, highest precedence first: command line,
    /// `REBUILD_CONSOLE_SERVER`, config file, defaults.
    pub fn resolve(
        cli: CliOverrides,
        env_server: Option<String>,
        file: Option<ConfigFile>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();

        let server_url = cli
            .server_url
            .or(env_server.filter(|s| !s.trim().is_empty()))
            .or(file.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let per_page = cli.per_page.or(file.per_page).unwrap_or(DEFAULT_PER_PAGE);
        if per_page == 0 {
            return Err(ConsoleError::Validation {
                message: "--per-page must be greater than 0".to_string(),
            }
            .into());
        }

        let format = match cli.format {
            Some(format) => format,
            None => match file.format {
                Some(format) => format
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?,
                None => RendererType::default(),
            },
        };

        Ok(Self {
            server_url: validate_server_url(&server_url)?,
            per_page,
            timeout: file.timeout_secs.map(Duration::from_secs),
            log_level: file.log_level,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
server_url: https://jvm-build.apps.example.com
per_page: 50
timeout_secs: 30
log_level: debug
format: json
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.server_url.as_deref(),
            Some("https://jvm-build.apps.example.com")
        );
        assert_eq!(config.per_page, Some(50));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "per_page: 10\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.per_page, Some(10));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_per_page_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "per_page: 0\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("per_page must be greater than 0"));
    }

    #[test]
    fn test_bad_scheme_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "server_url: ftp://example.com\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Invalid server URL"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: text
theme: dark
refresh: 5
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("theme"));
        assert!(config.unknown_fields.contains_key("refresh"));
    }

    #[test]
    fn test_defaults_without_any_source() {
        let settings = Settings::resolve(CliOverrides::default(), None, None).unwrap();
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert_eq!(settings.per_page, DEFAULT_PER_PAGE);
        assert_eq!(settings.timeout, None);
        assert_eq!(settings.format, RendererType::Text);
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let file = || ConfigFile {
            server_url: Some("http://file:8080".to_string()),
            per_page: Some(10),
            timeout_secs: Some(5),
            ..ConfigFile::default()
        };

        let from_file = Settings::resolve(CliOverrides::default(), None, Some(file())).unwrap();
        assert_eq!(from_file.server_url, "http://file:8080");
        assert_eq!(from_file.per_page, 10);
        assert_eq!(from_file.timeout, Some(Duration::from_secs(5)));

        let from_env = Settings::resolve(
            CliOverrides::default(),
            Some("http://env:8080/".to_string()),
            Some(file()),
        )
        .unwrap();
        assert_eq!(from_env.server_url, "http://env:8080");

        let from_cli = Settings::resolve(
            CliOverrides {
                server_url: Some("http://cli:8080".to_string()),
                per_page: Some(5),
                format: Some(RendererType::Json),
            },
            Some("http://env:8080".to_string()),
            Some(file()),
        )
        .unwrap();
        assert_eq!(from_cli.server_url, "http://cli:8080");
        assert_eq!(from_cli.per_page, 5);
        assert_eq!(from_cli.format, RendererType::Json);
    }

    #[test]
    fn test_invalid_cli_server_url() {
        let result = Settings::resolve(
            CliOverrides {
                server_url: Some("localhost".to_string()),
                ..CliOverrides::default()
            },
            None,
            None,
        );
        assert!(result.is_err());
    }
}
