use rewind_core::RankingResult;

use crate::error::GeminiError;

const MAX_SCORE: u8 = 100;

/// Parse the model's candidate text into a [`RankingResult`].
///
/// The text must be a bare JSON object with exactly `rankedExisting` and
/// `extraSuggestions`; every ranked item needs an integer `score` in 0..=100.
///
/// # Errors
///
/// Returns [`GeminiError::Output`] carrying the raw text on any mismatch.
pub fn parse_ranking(text: &str) -> Result<RankingResult, GeminiError> {
    let result: RankingResult =
        serde_json::from_str(text).map_err(|e| GeminiError::Output {
            reason: format!("invalid ranking JSON: {e}"),
            raw: text.to_owned(),
        })?;

    if let Some(item) = result.ranked_existing.iter().find(|i| i.score > MAX_SCORE) {
        return Err(GeminiError::Output {
            reason: format!("score {} for '{}' is above {MAX_SCORE}", item.score, item.name),
            raw: text.to_owned(),
        });
    }

    Ok(result)
}
