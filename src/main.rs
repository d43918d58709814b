use clap::{Parser, Subcommand};
use database::{run_migrations, StoreHandle};
use tracing_subscriber::EnvFilter;

/// A small item-store service with primary/read-replica routing and a
/// GitHub profile pass-through endpoint.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve,
    /// Apply pending schema migrations to the primary store and exit.
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from the .env file, if present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = configuration::load_config()?;

    match cli.command {
        Commands::Serve => web_server::run_server(config).await?,
        Commands::Migrate => {
            let primary = StoreHandle::new(&config.store.url)?;
            primary.connect().await?;
            run_migrations(&primary).await?;
            primary.close().await;
            tracing::info!("Migrations applied.");
        }
    }

    Ok(())
}
