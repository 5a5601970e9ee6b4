//! Translation client
//!
//! Issues requests against the remote translation API and collapses every
//! failure mode into a single uniform outcome. Callers never see transport
//! or parsing errors; those are logged here and nowhere else.

use async_trait::async_trait;
use reqwest::Client;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{TranslationOutcome, TranslationRequest};

/// The one user-facing message for any remote failure.
pub const FAILURE_MESSAGE: &str = "Translation failed. Please try again.";

const API_ENDPOINT: &str =
    "https://free-google-translator.p.rapidapi.com/external-api/free-google-translator";
const API_HOST: &str = "free-google-translator.p.rapidapi.com";

/// Seam for the remote translation call. The system implementation talks
/// HTTP; tests substitute in-memory fakes.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome;
}

pub struct RapidApiTranslator {
    http: Client,
    api_key: String,
}

impl RapidApiTranslator {
    pub fn new(api_key: String) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent("lingua-widgets/translator")
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self { http, api_key })
    }

    async fn fetch_translation(&self, request: &TranslationRequest) -> AppResult<String> {
        let response = self
            .http
            .post(API_ENDPOINT)
            .header("content-type", "application/json")
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", API_HOST)
            .query(&[
                ("from", request.source_lang.as_str()),
                ("to", request.target_lang.as_str()),
                ("query", request.text.as_str()),
            ])
            .json(&serde_json::json!({ "translate": "rapidapi" }))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "Translation API error: {}",
                response.status()
            )));
        }

        let json = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to parse JSON: {}", e)))?;

        extract_translation(&json)
    }
}

/// Pull the `translation` field out of the API response body.
fn extract_translation(json: &serde_json::Value) -> AppResult<String> {
    json.get("translation")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| AppError::Validation("Missing translation field in response".to_string()))
}

#[async_trait]
impl Translator for RapidApiTranslator {
    async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome {
        match self.fetch_translation(request).await {
            Ok(translated_text) => TranslationOutcome::Success { translated_text },
            Err(e) => {
                // Causes stay internal; the caller sees one fixed message.
                eprintln!("[Translator] Request failed: {}", e);
                TranslationOutcome::Failure {
                    message: FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}
