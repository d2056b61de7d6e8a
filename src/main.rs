mod cli;
mod commands;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use commands::open::Page;
use native_market::{Config, constants};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(constants::LOG_ENV, "warn"))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let page = match cli.command {
        Commands::Version { json } => return commands::version::version(json),
        Commands::Listing { app_id, country } => Page::Listing { app_id, country },
        Commands::DevPage { dev_id } => Page::DevPage(dev_id),
        Commands::Collection { name } => Page::Collection(name),
        Commands::EditorChoice { editor_choice } => Page::EditorChoice(editor_choice),
        Commands::Search { terms } => Page::Search(terms.join(" ")),
    };

    let mut config = Config::from_env()?;
    if let Some(platform) = cli.platform {
        config = config.with_platform(platform);
    }

    commands::open::open(&config, page, cli.dry_run).await
}
