//! # Recipe Endpoints
//!
//! Storing and retrieving configuration recipes.

use crate::error::ApiResult;
use crate::http::HttpTransport;
use crate::models::envelope::Version;
use crate::models::recipe::{ConfigurationRecipe, UpsertRecipeRequest};
use serde::Deserialize;

/// Response to a recipe upsert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRecipeResponse {
    /// The version written.
    pub version: Version,
}

/// Response wrapper for a recipe get.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecipeResponse {
    /// The stored recipe.
    pub value: ConfigurationRecipe,
}

/// Proxy for the `/api/recipes` endpoints.
#[derive(Debug, Clone)]
pub struct RecipesApi {
    transport: HttpTransport,
}

impl RecipesApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Stores a recipe, replacing any existing recipe with the same
    /// scope and code.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::ApiError`] if the request fails.
    pub async fn upsert(&self, recipe: &ConfigurationRecipe) -> ApiResult<UpsertRecipeResponse> {
        tracing::debug!(scope = %recipe.scope, code = %recipe.code, "upserting recipe");
        let request = UpsertRecipeRequest {
            configuration_recipe: recipe.clone(),
        };
        self.transport.post("api/recipes", &request).await
    }

    /// Retrieves a stored recipe.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the recipe does not exist.
    pub async fn get(&self, scope: &str, code: &str) -> ApiResult<ConfigurationRecipe> {
        let response: GetRecipeResponse =
            self.transport.get(&format!("api/recipes/{scope}/{code}")).await?;
        Ok(response.value)
    }
}
