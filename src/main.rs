use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mushaf::app::AppContext;
use mushaf::cli::{commands, Cli, Commands};
use mushaf::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(db) = cli.db {
        config.storage.db_path = Some(db);
    }
    if let Some(data_dir) = cli.data_dir {
        config.content.data_dir = Some(data_dir);
    }
    let system_theme = cli.system_theme.unwrap_or(config.reading.system_theme);

    let ctx = AppContext::new(&config)?;

    match cli.command {
        Commands::Resume { limit } => {
            commands::resume(&ctx, limit).await?;
        }
        Commands::Read {
            chapter,
            verse,
            limit,
        } => {
            commands::read_chapter(&ctx, chapter, verse, limit).await?;
        }
        Commands::Seen { verse } => {
            commands::mark_seen(&ctx, verse).await?;
        }
        Commands::Chapters => {
            commands::list_chapters(&ctx).await?;
        }
        Commands::Settings { action } => {
            commands::settings(&ctx, action, system_theme).await?;
        }
    }

    Ok(())
}
