mod config;
mod logging;
mod server;

use config::ConsumerConfig;
use logging::LoggingConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsumerConfig::from_env()?;

    let logging = if config.environment.is_production() {
        LoggingConfig::production()
    } else {
        LoggingConfig::development()
    };
    logging::init_logging(&logging.with_level(config.log_level.clone()))
        .map_err(|err| anyhow::anyhow!(err))?;

    server::serve(config).await
}
