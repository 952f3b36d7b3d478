// src/api/mod.rs

//! Spoonacular API access
//!
//! This module provides:
//! - [`RecipeClient`]: the three read-only calls the application needs
//!   (ingredient search, recipe information, analyzed instructions)
//! - [`Recipe`], [`RecipeDetails`], [`InstructionBlock`]: typed views over
//!   the raw JSON responses

mod client;
mod models;

pub use client::{RecipeClient, DEFAULT_SEARCH_LIMIT};
pub use models::{
    primary_steps, ExtendedIngredient, InstructionBlock, InstructionStep, Recipe, RecipeDetails,
};
