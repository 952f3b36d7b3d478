// src/cli.rs
//! CLI definitions for larder
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

use larder::{DEFAULT_BASE_URL, DEFAULT_SEARCH_LIMIT};

#[derive(Parser)]
#[command(name = "larder")]
#[command(author = "Larder Contributors")]
#[command(version)]
#[command(about = "Find recipes for the ingredients you already have", long_about = None)]
pub struct Cli {
    /// Spoonacular API key (falls back to the SPOONACULAR_API_KEY
    /// environment variable)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// API endpoint root
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL, value_name = "URL")]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search recipes by the ingredients on hand
    Search {
        /// Comma-separated ingredient list, e.g. "chicken, rice, tomatoes"
        ingredients: String,

        /// Maximum number of results to fetch
        #[arg(short = 'n', long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: u32,
    },

    /// Show time, servings, ingredients and instructions for a recipe
    Show {
        /// Recipe id from a previous search
        recipe_id: u64,
    },

    /// Manage favorite recipes
    #[command(subcommand)]
    Fav(FavCommands),
}

#[derive(Subcommand)]
pub enum FavCommands {
    /// Favorite a recipe from a search result
    Add {
        /// Recipe id to favorite
        recipe_id: u64,

        /// Ingredient list that surfaced the recipe
        ingredients: String,
    },

    /// Remove a recipe from favorites
    Remove {
        /// Recipe id to unfavorite
        recipe_id: u64,
    },

    /// List favorited recipes
    List,
}
