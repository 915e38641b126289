use crate::config::{DEFAULT_BIND_ADDR, DEFAULT_CONTEXT_PATH};
use crate::core::{ConfigProvider, TaxPolicy, Taxable};
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_bind_addr, validate_context_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tax: TaxConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: Option<String>,
    pub context_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxConfig {
    pub simple_rate: Option<f64>,
    pub middle_rate: Option<f64>,
    pub upper_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Applies explicit command-line values on top of the file.
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(addr) = &cli.bind_addr {
            tracing::info!("🔧 bind_addr overridden to: {}", addr);
            self.server.bind_addr = Some(addr.clone());
        }
        if let Some(path) = &cli.context_path {
            tracing::info!("🔧 context_path overridden to: {}", path);
            self.server.context_path = Some(path.clone());
        }
        if cli.simple_rate.is_some() {
            self.tax.simple_rate = cli.simple_rate;
        }
        if cli.middle_rate.is_some() {
            self.tax.middle_rate = cli.middle_rate;
        }
        if cli.upper_rate.is_some() {
            self.tax.upper_rate = cli.upper_rate;
        }
        if cli.json_logs {
            self.logging.get_or_insert_with(LoggingConfig::default).json = Some(true);
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_addr(&self) -> &str {
        self.server.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    fn context_path(&self) -> &str {
        self.server
            .context_path
            .as_deref()
            .unwrap_or(DEFAULT_CONTEXT_PATH)
    }

    fn tax_policy(&self) -> Result<TaxPolicy> {
        let defaults = TaxPolicy::default();
        TaxPolicy::new(
            self.tax.simple_rate.unwrap_or(defaults.simple_tax_rate()),
            self.tax.middle_rate.unwrap_or(defaults.middle_tax_rate()),
            self.tax.upper_rate.unwrap_or(defaults.upper_tax_rate()),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_addr("server.bind_addr", self.bind_addr())?;
        validate_context_path("server.context_path", self.context_path())?;
        self.tax_policy()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
bind_addr = "127.0.0.1:9000"
context_path = "/api"

[tax]
simple_rate = 10
middle_rate = 20.5
upper_rate = 30

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.context_path(), "/api");
        let policy = config.tax_policy().unwrap();
        assert_eq!(policy.simple_tax_rate(), 10.0);
        assert_eq!(policy.middle_tax_rate(), 20.5);
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(config.context_path(), DEFAULT_CONTEXT_PATH);
        assert_eq!(config.tax_policy().unwrap(), TaxPolicy::default());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DEVREG_TEST_UPPER_RATE", "42");

        let toml_content = r#"
[tax]
upper_rate = ${DEVREG_TEST_UPPER_RATE}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.tax_policy().unwrap().upper_tax_rate(), 42.0);

        std::env::remove_var("DEVREG_TEST_UPPER_RATE");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[server]
context_path = "no-leading-slash"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[tax]\nsimple_rate = 150.0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[server\nbind_addr = 1").unwrap_err();
        assert!(matches!(err, RegistryError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbind_addr = \"127.0.0.1:7000\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:7000");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file_values() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str("[tax]\nsimple_rate = 5.0\nmiddle_rate = 6.0\n").unwrap();
        let cli = crate::config::CliConfig::parse_from([
            "developer-registry",
            "--simple-rate",
            "12",
            "--bind-addr",
            "127.0.0.1:1234",
        ]);
        config.apply_overrides(&cli);

        let policy = config.tax_policy().unwrap();
        assert_eq!(policy.simple_tax_rate(), 12.0);
        assert_eq!(policy.middle_tax_rate(), 6.0);
        assert_eq!(config.bind_addr(), "127.0.0.1:1234");
    }
}
