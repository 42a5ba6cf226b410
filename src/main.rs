use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use repolist::{
    Cli, Commands, ConsoleRenderer, HttpRepositoryService, InMemoryRepositoryService, RecordDraft,
    RemoteRepositoryService, RepositoryListStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let service: Arc<dyn RemoteRepositoryService> = if cli.mock {
        info!("Using in-memory catalog service");
        Arc::new(InMemoryRepositoryService::with_samples())
    } else {
        let service = match cli.api_url.as_deref() {
            Some(url) => HttpRepositoryService::new(url),
            None => HttpRepositoryService::from_env(),
        };
        info!("Using catalog API at {}", service.base_url());
        Arc::new(service)
    };

    let store = RepositoryListStore::new(service);
    let renderer = Arc::new(ConsoleRenderer::new());

    match cli.command {
        Commands::List => {
            store.subscribe(renderer).await;
            store.load().await?;
        }

        Commands::Add { title, url, techs } => {
            // Load first so the rendered snapshot shows the whole catalog,
            // then subscribe so only the post-mutation state is printed.
            store.load().await?;
            store.subscribe(renderer).await;

            let record = store.add(&RecordDraft::new(title, url, techs)).await?;
            println!("Added {} ({})", record.title, record.id);
        }

        Commands::Like { id } => {
            store.load().await?;
            store.subscribe(renderer).await;

            let likes = store.like(&id).await?;
            println!("Record {} now has {} likes", id, likes);
        }

        Commands::Remove { id } => {
            store.load().await?;
            store.subscribe(renderer).await;

            if store.remove(&id).await? {
                println!("Removed {}", id);
            } else {
                println!("No record with id {} to remove", id);
            }
        }
    }

    Ok(())
}
