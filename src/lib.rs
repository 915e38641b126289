pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::build_router;
pub use app::server::RegistryServer;
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    DeleteResponse, Developer, DeveloperRegistry, DeveloperRequest, Experience, TaxPolicy,
    Taxable,
};
pub use utils::error::{RegistryError, Result};
