// src/api/models.rs

//! Recipe data models
//!
//! Typed views over the raw JSON the API returns: search results become
//! [`Recipe`] records, the information endpoint becomes [`RecipeDetails`],
//! and analyzed instructions become [`InstructionBlock`]s.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// URL root for human-facing recipe pages
const RECIPE_PAGE_BASE: &str = "https://spoonacular.com/recipes";

/// Fallback title when the API omits one
const NO_TITLE: &str = "No Title";

/// One search result: a recipe and how it matches the ingredients on hand.
///
/// Immutable after construction. Serializes with snake_case keys, which is
/// also the on-disk shape of favorites entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    /// Required ingredients the user already has, in API order
    pub used_ingredients: Vec<String>,
    /// Required ingredients the user still needs, in API order
    pub missed_ingredients: Vec<String>,
}

impl Recipe {
    /// Build a record from one raw `findByIngredients` result.
    ///
    /// Total over any JSON object: an absent `id` becomes 0, an absent
    /// `title` becomes `"No Title"`, absent ingredient arrays become empty
    /// lists. The only failure is a structural one: an ingredient element
    /// without a string `name`, or an ingredient field that is not an
    /// array.
    pub fn from_api_response(raw: &Value) -> Result<Self> {
        let id = raw.get("id").and_then(Value::as_u64).unwrap_or(0);
        let title = raw
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(NO_TITLE)
            .to_string();

        Ok(Self {
            id,
            title,
            used_ingredients: ingredient_names(raw, "usedIngredients")?,
            missed_ingredients: ingredient_names(raw, "missedIngredients")?,
        })
    }

    /// Human-facing page for this recipe: the title with spaces replaced by
    /// hyphens, lowercased, joined with the id.
    pub fn display_url(&self) -> String {
        let slug = self.title.replace(' ', "-").to_lowercase();
        format!("{RECIPE_PAGE_BASE}/{slug}-{}", self.id)
    }
}

/// Project `field[].name` out of a raw search result.
///
/// A missing field is an empty list; a present element without a string
/// `name` is a malformed response.
fn ingredient_names(raw: &Value, field: &str) -> Result<Vec<String>> {
    let Some(value) = raw.get(field) else {
        return Ok(Vec::new());
    };
    let items = value
        .as_array()
        .ok_or_else(|| Error::MalformedResponse(format!("`{field}` is not an array")))?;

    items
        .iter()
        .map(|item| {
            item.get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::MalformedResponse(format!("`{field}` element without a `name` field"))
                })
        })
        .collect()
}

/// Detail view of one recipe, from the information endpoint.
///
/// Every field is defaulted: the API omits values freely and absent ones
/// render as `N/A` downstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
}

impl RecipeDetails {
    /// Decode the raw information object
    pub fn from_api_response(raw: Value) -> Result<Self> {
        serde_json::from_value(raw)
            .map_err(|e| Error::MalformedResponse(format!("recipe details: {e}")))
    }
}

/// One entry of `extendedIngredients`
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedIngredient {
    /// Full ingredient line as written in the source recipe
    #[serde(default)]
    pub original: Option<String>,
}

/// One analyzed-instructions block. A recipe may carry several (for
/// example a main preparation plus a sauce); the UI only ever showed the
/// first.
#[derive(Debug, Clone, Deserialize)]
pub struct InstructionBlock {
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

impl InstructionBlock {
    /// Decode the raw `analyzedInstructions` array
    pub fn from_api_response(raw: Vec<Value>) -> Result<Vec<Self>> {
        raw.into_iter()
            .map(|block| {
                serde_json::from_value(block)
                    .map_err(|e| Error::MalformedResponse(format!("instructions: {e}")))
            })
            .collect()
    }
}

/// One numbered step within an instruction block
#[derive(Debug, Clone, Deserialize)]
pub struct InstructionStep {
    #[serde(default)]
    pub step: String,
}

/// Steps of the primary instruction block.
///
/// The API returns an empty array for recipes it has no analyzed
/// instructions for; that yields an empty list here, never an error.
pub fn primary_steps(blocks: &[InstructionBlock]) -> Vec<String> {
    blocks
        .first()
        .map(|block| block.steps.iter().map(|s| s.step.clone()).collect())
        .unwrap_or_default()
}
