use anyhow::Context;
use clap::Parser;
use developer_registry::utils::{logger, validation::Validate};
use developer_registry::{CliConfig, RegistryServer, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Load the file first so its [logging] section can shape the subscriber.
    let file_config = match &cli.config {
        Some(path) => {
            let mut config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            config.apply_overrides(&cli);
            Some(config)
        }
        None => None,
    };

    match &file_config {
        Some(config) => logger::init_logger(cli.verbose, config.json_logs(), config.log_level()),
        None => logger::init_logger(cli.verbose, cli.json_logs, None),
    }

    tracing::info!("Starting developer-registry");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match file_config {
        Some(config) => {
            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            tracing::info!("✅ Configuration loaded from {:?}", cli.config);
            run(config).await
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            run(cli).await
        }
    }
}

async fn run<C: developer_registry::core::ConfigProvider>(config: C) -> anyhow::Result<()> {
    let server = RegistryServer::new(config).context("invalid tax configuration")?;
    server.run().await.context("server terminated with an error")?;
    tracing::info!("👋 developer-registry stopped");
    Ok(())
}
