use clap::Parser;
use color_eyre::Result;
use portfolio_tui::config::init_app_config;
use portfolio_tui::logging::init_logging;
use portfolio_core::Portfolio;
use portfolio_tui::{event, terminal, App, AppActions, CliArgs};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let _logger = init_logging(&config.log_dir, config.debug)?;

    let mut actions = AppActions::new(config);
    actions.initialize().await?;

    if let Some(path) = &args.import {
        let portfolio = actions.import(Path::new(path)).await?;
        println!("Imported {} projects from {path}", portfolio.catalog.len());
    }

    if args.seed_sample && actions.seed_sample().await? {
        println!("Seeded the sample portfolio");
    }

    if let Some(path) = args.export.as_deref() {
        let path = (!path.is_empty()).then(|| Path::new(path));
        let written = actions.export(path).await?;
        println!("Exported portfolio to {}", written.display());
        return Ok(());
    }

    if args.headless || args.json || !is_terminal() {
        return event::run_headless(&actions, args.json).await;
    }

    let (portfolio, hint) = match actions.load_portfolio().await {
        Ok(portfolio) if portfolio.catalog.is_empty() => {
            (portfolio, Some("Database is empty: restart with --seed-sample or --import PATH"))
        }
        Ok(portfolio) => (portfolio, None),
        Err(e) => {
            log::error!("failed to load portfolio: {e}");
            (Portfolio::default(), Some("Could not load the stored portfolio, see the log"))
        }
    };

    let mut app = App::new(portfolio, &args.initial_location());
    if let Some(hint) = hint {
        app.status_message = hint.to_string();
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
