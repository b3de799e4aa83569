//! Boundary normalization for decade and style inputs.
//!
//! Request payloads arrive loosely typed; everything here turns them into a
//! plain ordered `Vec<String>` or `Option<String>` before the engine sees them.

use serde::Deserialize;

/// Parse the comma-separated `styles` query parameter of the plain query path.
///
/// Segments are trimmed and lowercased; empty segments are dropped.
#[must_use]
pub fn parse_style_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Trim a decade label, treating empty input as absent.
#[must_use]
pub fn normalize_decade(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|d| !d.is_empty())
        .map(ToOwned::to_owned)
}

/// The `styles` field of the AI ranking request body: either a JSON array of
/// strings or a single comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StylesInput {
    List(Vec<String>),
    Joined(String),
}

impl StylesInput {
    /// Flatten into an ordered list of trimmed, non-empty styles. Case is preserved.
    #[must_use]
    pub fn into_styles(self) -> Vec<String> {
        let parts: Vec<String> = match self {
            StylesInput::List(items) => items,
            StylesInput::Joined(joined) => joined.split(',').map(ToOwned::to_owned).collect(),
        };

        parts
            .into_iter()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
