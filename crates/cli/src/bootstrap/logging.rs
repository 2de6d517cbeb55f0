use rootwalk_domain::Config;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries only lookup results.
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
