//! Request builder
//!
//! Turns the current input text and target language selection into a
//! `TranslationRequest`. Deterministic, no side effects. The session
//! controller never calls this with empty input; the checks here are a
//! backstop for hosts driving the engine directly.

use crate::core::catalog;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{TranslationRequest, MAX_INPUT_CHARS, SOURCE_LANG};

pub fn build(input_text: &str, target_lang: &str) -> AppResult<TranslationRequest> {
    if input_text.is_empty() {
        return Err(AppError::Validation("Input text is empty".to_string()));
    }

    let char_count = input_text.chars().count();
    if char_count > MAX_INPUT_CHARS {
        return Err(AppError::Validation(format!(
            "Input text too long: {} chars (max {})",
            char_count, MAX_INPUT_CHARS
        )));
    }

    if catalog::lookup(target_lang).is_none() {
        return Err(AppError::Validation(format!(
            "Unknown target language: {}",
            target_lang
        )));
    }

    Ok(TranslationRequest {
        text: input_text.to_string(),
        source_lang: SOURCE_LANG.to_string(),
        target_lang: target_lang.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_valid_request() {
        let request = build("Hello", "es").unwrap();
        assert_eq!(request.text, "Hello");
        assert_eq!(request.source_lang, "en");
        assert_eq!(request.target_lang, "es");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(build("", "es"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_input_at_limit_accepted() {
        let text = "a".repeat(1000);
        assert!(build(&text, "fr").is_ok());
    }

    #[test]
    fn test_input_over_limit_rejected() {
        let text = "a".repeat(1001);
        assert!(matches!(build(&text, "fr"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_target_rejected() {
        assert!(matches!(build("Hello", "xx"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_multibyte_chars_counted_not_bytes() {
        // 1000 CJK chars exceed 1000 bytes but stay within the char limit
        let text = "你".repeat(1000);
        assert!(build(&text, "zh").is_ok());
    }
}
