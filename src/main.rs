// src/main.rs

use anyhow::{bail, Result};
use clap::Parser;

use larder::{ApiConfig, FavoritesStore, RecipeClient, API_KEY_ENV};

mod cli;
mod commands;

use cli::{Cli, Commands, FavCommands};

/// Resolve the API key and build a client. Commands that only touch the
/// favorites store never call this, so they work without a key.
fn make_client(api_key: Option<String>, base_url: &str) -> Result<RecipeClient> {
    let key = api_key
        .or_else(|| std::env::var(API_KEY_ENV).ok())
        .filter(|key| !key.is_empty());
    let Some(key) = key else {
        bail!("no API key: pass --api-key or set {API_KEY_ENV}");
    };

    let config = ApiConfig::new(key).with_base_url(base_url);
    Ok(RecipeClient::new(config)?)
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Cli {
        api_key,
        base_url,
        command,
    } = Cli::parse();

    match command {
        Commands::Search { ingredients, limit } => {
            let client = make_client(api_key, &base_url)?;
            let store = FavoritesStore::open();
            commands::search(&client, &store, &ingredients, limit)
        }
        Commands::Show { recipe_id } => {
            let client = make_client(api_key, &base_url)?;
            commands::show(&client, recipe_id)
        }
        Commands::Fav(FavCommands::Add {
            recipe_id,
            ingredients,
        }) => {
            let client = make_client(api_key, &base_url)?;
            let mut store = FavoritesStore::open();
            commands::fav_add(&client, &mut store, recipe_id, &ingredients)
        }
        Commands::Fav(FavCommands::Remove { recipe_id }) => {
            let mut store = FavoritesStore::open();
            commands::fav_remove(&mut store, recipe_id)
        }
        Commands::Fav(FavCommands::List) => {
            let store = FavoritesStore::open();
            commands::fav_list(&store)
        }
    }
}
