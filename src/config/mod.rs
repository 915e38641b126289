pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, TaxPolicy, Taxable};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_bind_addr, validate_context_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CONTEXT_PATH: &str = "/workintech";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "developer-registry")]
#[command(about = "In-memory developer registry with tier-based salary tax")]
pub struct CliConfig {
    /// Path to a TOML configuration file; explicit flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to listen on [default: 0.0.0.0:8080]
    #[arg(long)]
    pub bind_addr: Option<String>,

    /// Prefix the developer routes are mounted under [default: /workintech]
    #[arg(long)]
    pub context_path: Option<String>,

    /// Tax rate (percent) for junior developers [default: 15]
    #[arg(long)]
    pub simple_rate: Option<f64>,

    /// Tax rate (percent) for mid-level developers [default: 25]
    #[arg(long)]
    pub middle_rate: Option<f64>,

    /// Tax rate (percent) for senior developers [default: 35]
    #[arg(long)]
    pub upper_rate: Option<f64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    fn context_path(&self) -> &str {
        self.context_path.as_deref().unwrap_or(DEFAULT_CONTEXT_PATH)
    }

    fn tax_policy(&self) -> Result<TaxPolicy> {
        let defaults = TaxPolicy::default();
        TaxPolicy::new(
            self.simple_rate.unwrap_or(defaults.simple_tax_rate()),
            self.middle_rate.unwrap_or(defaults.middle_tax_rate()),
            self.upper_rate.unwrap_or(defaults.upper_tax_rate()),
        )
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_addr("bind_addr", self.bind_addr())?;
        validate_context_path("context_path", self.context_path())?;
        self.tax_policy()?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["developer-registry"]);
        assert_eq!(config.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(config.context_path(), DEFAULT_CONTEXT_PATH);
        assert_eq!(config.tax_policy().unwrap(), TaxPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rate_flags() {
        let config = CliConfig::parse_from([
            "developer-registry",
            "--simple-rate",
            "10",
            "--upper-rate",
            "40",
            "--context-path",
            "/",
        ]);
        let policy = config.tax_policy().unwrap();
        assert_eq!(policy.simple_tax_rate(), 10.0);
        assert_eq!(policy.middle_tax_rate(), 25.0);
        assert_eq!(policy.upper_tax_rate(), 40.0);
        assert_eq!(config.context_path(), "/");
    }

    #[test]
    fn test_cli_rejects_bad_rate() {
        let config = CliConfig::parse_from(["developer-registry", "--middle-rate", "120"]);
        assert!(config.validate().is_err());
    }
}
