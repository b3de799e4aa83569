//! HTTP client for the Gemini `generateContent` REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use rewind_core::{AssistantError, RankingAssistant, RankingRequest, RankingResult};

use crate::error::GeminiError;
use crate::parse::parse_ranking;
use crate::prompt::build_prompt;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl GeminiClient {
    /// Creates a new client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("rewind/0.1 (store-recommendations)")
            .build()?;

        // A trailing slash makes `Url::join` append rather than replace the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| GeminiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> Result<Url, GeminiError> {
        self.base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))
            .map_err(|e| GeminiError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))
    }

    /// Sends `prompt` as a single user turn and returns the first candidate's
    /// text.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure or an undecodable envelope.
    /// - [`GeminiError::Status`] on a non-2xx status.
    /// - [`GeminiError::EmptyResponse`] if no candidate text came back.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = self.endpoint()?;
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::json_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = response.json().await?;
        envelope
            .first_candidate_text()
            .ok_or(GeminiError::EmptyResponse)
    }

    /// Build the prompt, call the model, and parse its ranking.
    ///
    /// # Errors
    ///
    /// Any [`GeminiError`]; parse failures come back as [`GeminiError::Output`].
    pub async fn rank_stores(&self, request: &RankingRequest) -> Result<RankingResult, GeminiError> {
        let prompt = build_prompt(request)?;
        tracing::debug!(
            model = %self.model,
            decade = %request.decade,
            candidates = request.candidate_stores.len(),
            "requesting store ranking"
        );
        let text = self.generate_content(&prompt).await?;
        parse_ranking(&text)
    }
}

#[async_trait]
impl RankingAssistant for GeminiClient {
    async fn rank(&self, request: &RankingRequest) -> Result<RankingResult, AssistantError> {
        self.rank_stores(request).await.map_err(AssistantError::from)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
