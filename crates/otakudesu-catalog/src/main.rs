//! otakudesu catalog CLI.
//!
//! Runs one catalog navigation per invocation and prints the resulting model
//! as pretty JSON on stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use otakudesu_catalog::AnimeCatalog;
use serde::Serialize;
use shared::{Config, ContinueWatchingStore, LogConfig, NewContinueWatchingItem};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Catalog(CatalogCommand),
    /// Continue-watching list
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Ongoing and completed sections of the home page
    Home,
    /// Currently airing anime
    Ongoing {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Completed anime
    Completed {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Search anime by title
    Search { query: String },
    /// Anime detail page
    Anime { slug: String },
    /// Episode watch page
    Episode {
        slug: String,
        /// Anime slug; records the episode in the continue-watching list
        #[arg(long)]
        anime: Option<String>,
        /// Resolve every mirror URL (one request per mirror)
        #[arg(long)]
        resolve: bool,
    },
    /// Resolve a streaming server to a playable URL
    Server { server_id: String },
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// Show the list, most recent first
    List,
    /// Remove the entry of one anime
    Remove { anime_slug: String },
    /// Remove every entry
    Clear,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let mut log_config = LogConfig::from_config(&config, "otakudesu-catalog");
    if args.verbose {
        log_config.default_level = tracing::Level::DEBUG;
        log_config.console = true;
    }
    shared::logging::init(log_config)?;

    info!(config_file = %args.config.display(), "Loaded configuration");

    let store = ContinueWatchingStore::new(
        config.continue_watching_path(),
        config.continue_watching.capacity,
    );

    match args.command {
        Command::History { action } => run_history(&store, &action),
        Command::Catalog(command) => run_catalog(&config, &store, command).await,
    }
}

async fn run_catalog(
    config: &Config,
    store: &ContinueWatchingStore,
    command: CatalogCommand,
) -> Result<()> {
    let catalog = AnimeCatalog::from_base_url(&config.api.base_url)
        .context("Failed to create catalog client")?;
    let navigation = catalog.navigate();

    match command {
        CatalogCommand::Home => print_json(&navigation.run(catalog.get_home()).await?),
        CatalogCommand::Ongoing { page } => {
            print_json(&navigation.run(catalog.get_ongoing_anime(page)).await?)
        }
        CatalogCommand::Completed { page } => {
            print_json(&navigation.run(catalog.get_completed_anime(page)).await?)
        }
        CatalogCommand::Search { query } => {
            print_json(&navigation.run(catalog.search_anime(&query)).await?)
        }
        CatalogCommand::Anime { slug } => {
            print_json(&navigation.run(catalog.get_anime_detail(&slug)).await?)
        }
        CatalogCommand::Episode {
            slug,
            anime,
            resolve,
        } => {
            let mut episode = navigation.run(catalog.get_episode_detail(&slug)).await?;

            if resolve {
                let resolved = catalog
                    .resolve_mirrors(&mut episode.data.mirrors, &navigation)
                    .await;
                info!(
                    resolved = resolved,
                    total = episode.data.mirrors.len(),
                    "Resolved mirrors"
                );
            }

            if let Some(anime_slug) = anime.filter(|_| episode.success) {
                store
                    .add(NewContinueWatchingItem {
                        anime_slug,
                        anime_title: episode.data.title.clone(),
                        episode_slug: slug.clone(),
                        episode_title: episode.data.title.clone(),
                        thumbnail: String::new(),
                        progress: None,
                    })
                    .context("Failed to update continue-watching list")?;
            }

            print_json(&episode)
        }
        CatalogCommand::Server { server_id } => {
            let url = catalog.get_server_url(&server_id).await;
            if url.is_none() {
                warn!(server_id = %server_id, "Server URL could not be resolved");
            }
            print_json(&serde_json::json!({ "serverId": server_id, "url": url }))
        }
    }
}

fn run_history(store: &ContinueWatchingStore, action: &HistoryAction) -> Result<()> {
    match action {
        HistoryAction::List => print_json(&store.list()),
        HistoryAction::Remove { anime_slug } => {
            store.remove(anime_slug)?;
            info!(anime_slug = %anime_slug, "Removed continue-watching entry");
            print_json(&store.list())
        }
        HistoryAction::Clear => {
            store.clear()?;
            print_json(&store.list())
        }
    }
}
