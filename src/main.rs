mod cli;

use anyhow::Context;
use clap::Parser;
use property_search::config::Config;
use property_search::App;
use tracing::info;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load config")?;
    config.logging.init();

    info!("🏠 Property Search");

    let mut app = App::from_config(&config).context("Failed to start")?;
    cli::run(cli.command, &mut app)
}
