use anyhow::Context;
use clap::Parser;

use tourdesk::catalog::demo_catalog;
use tourdesk::cli::Cli;
use tourdesk::config::{Config, ConfigStore};
use tourdesk::trace::init_tracing;
use tourdesk::ui::app::App;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if let Some(tick_ms) = cli.tick_ms {
        config.ui.tick_ms = tick_ms;
    }
    let store = ConfigStore::new(config, config_path);

    let mut app = App::new(store, demo_catalog());
    app.navigate(&cli.route);

    tourdesk::ui::run(app).context("terminal session failed")?;
    Ok(())
}
