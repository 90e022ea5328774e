use serde::{Deserialize, Serialize};

fn default_limit() -> usize {
    3
}

/// One recipe suggestion request, as posted to the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRequest {
    /// Food genres the user likes, in the order given. May be empty.
    #[serde(default, rename = "likedFoods")]
    pub liked_foods: Vec<String>,
    /// How many suggestions to ask for. A limit of 0 yields an empty
    /// result rather than an error; callers wanting stricter behavior
    /// must validate upstream.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RecipeRequest {
    fn default() -> Self {
        RecipeRequest {
            liked_foods: Vec::new(),
            limit: default_limit(),
        }
    }
}

/// A single suggested recipe.
///
/// Entries produced by structured extraction always carry a URL (the
/// model's own, or a synthesized search link). Entries recovered by the
/// line-based fallback are title-only; a missing `url` is omitted from
/// the serialized output entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RecipeEntry {
    pub fn with_url(title: impl Into<String>, url: impl Into<String>) -> Self {
        RecipeEntry {
            title: title.into(),
            url: Some(url.into()),
        }
    }

    pub fn title_only(title: impl Into<String>) -> Self {
        RecipeEntry {
            title: title.into(),
            url: None,
        }
    }
}

/// The response body for a suggestion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResult {
    pub recipes: Vec<RecipeEntry>,
}
