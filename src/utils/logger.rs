use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match (verbose, level) {
        (true, _) => EnvFilter::new("developer_registry=debug,tower_http=debug,info"),
        (false, Some(level)) => EnvFilter::new(format!("developer_registry={},info", level)),
        (false, None) => EnvFilter::new("developer_registry=info,warn"),
    })
}

/// Installs the global subscriber. `level` comes from the `[logging]` section
/// of a TOML config and is ignored when `RUST_LOG` is set.
pub fn init_logger(verbose: bool, json: bool, level: Option<&str>) {
    let filter = build_filter(verbose, level);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}
