// src/lib.rs

//! Larder — find recipes for the ingredients you already have
//!
//! Queries the Spoonacular API by ingredient list, ranks results by how
//! many required ingredients are already on hand, and keeps favorites in a
//! local JSON file under the user's home directory.
//!
//! # Architecture
//!
//! - [`api::RecipeClient`]: blocking HTTP wrapper over the three read-only
//!   endpoints the application uses
//! - [`api::Recipe`]: flat value type built from one search result, with a
//!   derived display URL
//! - [`favorites::FavoritesStore`]: id → fields mapping persisted as a
//!   single JSON file, rewritten in full on every mutation
//!
//! Everything is single-threaded and synchronous: one request in flight at
//! a time, one writer to the favorites file.

pub mod api;
pub mod config;
mod error;
pub mod favorites;

pub use api::{
    primary_steps, ExtendedIngredient, InstructionBlock, InstructionStep, Recipe, RecipeClient,
    RecipeDetails, DEFAULT_SEARCH_LIMIT,
};
pub use config::{ApiConfig, API_KEY_ENV, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use favorites::{default_favorites_path, FavoritesStore, FAVORITES_FILE_NAME};
