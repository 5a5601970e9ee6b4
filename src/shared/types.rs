use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source language is fixed: the engine translates out of English only.
pub const SOURCE_LANG: &str = "en";

/// Hard cap on the input text length, matching the UI-level truncation.
pub const MAX_INPUT_CHARS: usize = 1000;

/// A single translation request, built by the request builder and consumed
/// by the translation client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Outcome of one translation attempt. Exactly one variant holds; the client
/// never surfaces anything beyond these two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TranslationOutcome {
    Success { translated_text: String },
    Failure { message: String },
}

/// One past translation, created only on success and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub input: String,
    pub output: String,
    pub language_name: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(input: String, output: String, language_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            input,
            output,
            language_name,
            created_at: Utc::now(),
        }
    }
}

/// Mutable session state, owned by the session controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub input_text: String,
    pub target_lang: String,
    pub output_text: String,
    pub is_loading: bool,
    pub last_action_succeeded: bool,
}

impl SessionState {
    pub fn new(target_lang: String) -> Self {
        Self {
            input_text: String::new(),
            target_lang,
            output_text: String::new(),
            is_loading: false,
            last_action_succeeded: false,
        }
    }
}
