use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use skycast::app::App;
use skycast::config::SkycastConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = SkycastConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    debug!("Configuration loaded");

    if config.weather.api_key.is_none() {
        println!("Note: no API key configured; weather lookups will fail.");
        println!("Set SKYCAST_WEATHER__API_KEY or add api_key to the config file.");
    }

    let mut app = App::new(&config)?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    app.run(&mut input).await
}
