// src/commands.rs
//! Command handlers for the larder CLI
//!
//! Handlers take the domain objects they operate on as parameters; nothing
//! here reaches into process-wide state. Printing happens here, at the
//! presentation boundary, never inside the library.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::info;

use larder::{
    primary_steps, FavoritesStore, InstructionBlock, Recipe, RecipeClient, RecipeDetails,
    DEFAULT_SEARCH_LIMIT,
};

/// Search and print matching recipes, marking existing favorites
pub fn search(
    client: &RecipeClient,
    store: &FavoritesStore,
    ingredients: &str,
    limit: u32,
) -> Result<()> {
    let recipes = fetch_recipes(client, ingredients, limit)?;
    if recipes.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }

    for recipe in &recipes {
        let marker = if store.is_favorite(recipe.id) { "★" } else { " " };
        println!("{} {} (id {})", marker, recipe.title, recipe.id);
        println!("    {}", recipe.display_url());
        if !recipe.used_ingredients.is_empty() {
            println!("    have:    {}", recipe.used_ingredients.join(", "));
        }
        if !recipe.missed_ingredients.is_empty() {
            println!("    missing: {}", recipe.missed_ingredients.join(", "));
        }
    }
    Ok(())
}

/// Fetch and print the detail view: time, servings, ingredient lines,
/// numbered steps
pub fn show(client: &RecipeClient, recipe_id: u64) -> Result<()> {
    let details = RecipeDetails::from_api_response(client.recipe_details(recipe_id)?)?;
    let blocks = InstructionBlock::from_api_response(client.recipe_instructions(recipe_id)?)?;

    let minutes = details
        .ready_in_minutes
        .map_or_else(|| "N/A".to_string(), |m| m.to_string());
    let servings = details
        .servings
        .map_or_else(|| "N/A".to_string(), |s| s.to_string());
    println!("Ready in {minutes} minutes, serves {servings}");

    println!("\nIngredients:");
    for ingredient in &details.extended_ingredients {
        if let Some(line) = &ingredient.original {
            println!("  - {line}");
        }
    }

    println!("\nInstructions:");
    let steps = primary_steps(&blocks);
    if steps.is_empty() {
        println!("  No instructions available.");
    } else {
        for (idx, step) in steps.iter().enumerate() {
            println!("  {}. {}", idx + 1, step);
        }
    }
    Ok(())
}

/// Favorite one result of a fresh search.
///
/// A favorite is always captured from a search result, so the id must be
/// among the results for the given ingredient list.
pub fn fav_add(
    client: &RecipeClient,
    store: &mut FavoritesStore,
    recipe_id: u64,
    ingredients: &str,
) -> Result<()> {
    let recipes = fetch_recipes(client, ingredients, DEFAULT_SEARCH_LIMIT)?;
    let Some(recipe) = recipes.into_iter().find(|r| r.id == recipe_id) else {
        bail!("recipe {recipe_id} is not among the results for \"{ingredients}\"");
    };

    let data = serde_json::to_value(&recipe).context("serializing recipe")?;
    store.add(recipe.id, data)?;
    info!("favorited recipe {}", recipe.id);
    println!("★ {} (id {}) added to favorites", recipe.title, recipe.id);
    Ok(())
}

/// Drop a recipe from the favorites file
pub fn fav_remove(store: &mut FavoritesStore, recipe_id: u64) -> Result<()> {
    store.remove(recipe_id)?;
    println!("Recipe {recipe_id} removed from favorites");
    Ok(())
}

/// Print every stored favorite, lowest id first
pub fn fav_list(store: &FavoritesStore) -> Result<()> {
    if store.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }

    let mut entries: Vec<(&str, &Value)> = store.iter().collect();
    entries.sort_by_key(|(id, _)| id.parse::<u64>().unwrap_or(u64::MAX));

    for (id, data) in entries {
        let title = data
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("(no title)");
        println!("★ {title} (id {id})");
    }
    Ok(())
}

/// Run a search and convert each raw result into a typed record
fn fetch_recipes(client: &RecipeClient, ingredients: &str, limit: u32) -> Result<Vec<Recipe>> {
    let raw = client.search_by_ingredients(ingredients, limit)?;
    raw.iter()
        .map(Recipe::from_api_response)
        .collect::<larder::Result<Vec<_>>>()
        .context("converting search results")
}
