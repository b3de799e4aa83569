//! Prompt construction for the ranking request.

use rewind_core::{RankingRequest, Store};
use serde::Serialize;

use crate::error::GeminiError;

/// Stands in for the style list when the user picked none.
pub const NO_STYLES_SELECTED: &str = "no specific elements selected";

/// The subset of a store shown to the model. The row id stays server-side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidateStore<'a> {
    name: &'a str,
    url: &'a str,
    description: &'a str,
    rating: f64,
    decades: &'a [String],
    style_tags: &'a [String],
}

impl<'a> From<&'a Store> for CandidateStore<'a> {
    fn from(store: &'a Store) -> Self {
        Self {
            name: &store.name,
            url: &store.url,
            description: &store.description,
            rating: store.rating,
            decades: &store.decades,
            style_tags: &store.style_tags,
        }
    }
}

/// Build the natural-language ranking instruction for one request.
///
/// # Errors
///
/// Returns [`GeminiError::Encode`] if the candidate list cannot be serialized.
pub fn build_prompt(request: &RankingRequest) -> Result<String, GeminiError> {
    let styles = if request.style_tags.is_empty() {
        NO_STYLES_SELECTED.to_owned()
    } else {
        request.style_tags.join(", ")
    };

    let candidates: Vec<CandidateStore<'_>> = request
        .candidate_stores
        .iter()
        .map(CandidateStore::from)
        .collect();
    let candidates = serde_json::to_string_pretty(&candidates).map_err(GeminiError::Encode)?;

    Ok(format!(
        r#"You are a fashion shopping assistant.

User is interested in styles from the {decade}, with these signature elements:
{styles}.

You also have this list of existing online stores (from my database):

{candidates}

1. Rank the existing stores from best to worst match for this user.
2. Optionally, suggest up to 3 additional online stores that are known for these styles.
3. Return ONLY JSON in the following structure (no extra commentary):

{{
  "rankedExisting": [
    {{ "name": "...", "reason": "...", "score": 0-100 }}
  ],
  "extraSuggestions": [
    {{ "name": "...", "url": "...", "description": "..." }}
  ]
}}
"#,
        decade = request.decade,
    ))
}
