// src/api/client.rs

//! Blocking HTTP client for the Spoonacular recipe API
//!
//! Wraps the three read-only endpoints the application uses. Every call is
//! a fresh round trip: no retries, no caching, one request in flight at a
//! time.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Timeout applied to the client as a whole (connect + read)
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of search results to request
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;

/// Ranking mode 2 asks the API to maximize used ingredients first
const RANKING_MAX_USED: &str = "2";

/// Client for the recipe API
pub struct RecipeClient {
    http: Client,
    config: ApiConfig,
}

impl RecipeClient {
    /// Create a client against the configured endpoint
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(Error::Init)?;

        Ok(Self { http, config })
    }

    /// Search recipes by a comma-separated ingredient list.
    ///
    /// Returns the raw result objects; see
    /// [`Recipe::from_api_response`](crate::api::Recipe::from_api_response)
    /// for the typed view. `ignorePantry=true` keeps staples like water and
    /// salt out of the match counts.
    pub fn search_by_ingredients(&self, ingredients: &str, limit: u32) -> Result<Vec<Value>> {
        let url = format!("{}/recipes/findByIngredients", self.config.base_url);
        let results: Vec<Value> = self.get_json(
            &url,
            &[
                ("ingredients", ingredients.to_string()),
                ("number", limit.to_string()),
                ("ranking", RANKING_MAX_USED.to_string()),
                ("ignorePantry", "true".to_string()),
            ],
        )?;
        info!("search returned {} recipes", results.len());
        Ok(results)
    }

    /// Fetch the information object for one recipe
    pub fn recipe_details(&self, recipe_id: u64) -> Result<Value> {
        let url = format!("{}/recipes/{recipe_id}/information", self.config.base_url);
        self.get_json(&url, &[])
    }

    /// Fetch the analyzed-instructions blocks for one recipe.
    ///
    /// The returned array is empty for recipes the API has no analyzed
    /// instructions for; callers must not assume a first element exists.
    pub fn recipe_instructions(&self, recipe_id: u64) -> Result<Vec<Value>> {
        let url = format!(
            "{}/recipes/{recipe_id}/analyzedInstructions",
            self.config.base_url
        );
        self.get_json(&url, &[])
    }

    /// Issue one GET with the API key attached and decode the JSON body.
    ///
    /// A non-success status never yields a partial parse: the body is
    /// captured verbatim into the error instead.
    fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .query(query)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Request {
                url: url.to_string(),
                status,
                body,
            });
        }

        response
            .json()
            .map_err(|e| Error::MalformedResponse(format!("{url}: {e}")))
    }
}
