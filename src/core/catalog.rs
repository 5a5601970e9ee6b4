//! Language catalog
//!
//! Fixed table of target languages supported by the translator, loaded once
//! at compile time. Lookup failures are never fatal; display falls back to
//! the raw code.

/// A single catalog entry: ISO 639-1 code and English display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
}

/// The 24 target languages of the reference deployment.
pub const LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { code: "ar", name: "Arabic" },
    LanguageEntry { code: "bn", name: "Bengali" },
    LanguageEntry { code: "zh", name: "Chinese" },
    LanguageEntry { code: "cs", name: "Czech" },
    LanguageEntry { code: "nl", name: "Dutch" },
    LanguageEntry { code: "es", name: "Spanish" },
    LanguageEntry { code: "fi", name: "Finnish" },
    LanguageEntry { code: "fr", name: "French" },
    LanguageEntry { code: "de", name: "German" },
    LanguageEntry { code: "el", name: "Greek" },
    LanguageEntry { code: "hi", name: "Hindi" },
    LanguageEntry { code: "id", name: "Indonesian" },
    LanguageEntry { code: "it", name: "Italian" },
    LanguageEntry { code: "ja", name: "Japanese" },
    LanguageEntry { code: "ko", name: "Korean" },
    LanguageEntry { code: "pl", name: "Polish" },
    LanguageEntry { code: "pt", name: "Portuguese" },
    LanguageEntry { code: "ru", name: "Russian" },
    LanguageEntry { code: "sv", name: "Swedish" },
    LanguageEntry { code: "th", name: "Thai" },
    LanguageEntry { code: "tr", name: "Turkish" },
    LanguageEntry { code: "uk", name: "Ukrainian" },
    LanguageEntry { code: "ur", name: "Urdu" },
    LanguageEntry { code: "vi", name: "Vietnamese" },
];

/// Look up a catalog entry by language code.
pub fn lookup(code: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.code == code)
}

/// Display name for a language code, falling back to the raw code when the
/// code is not in the catalog.
pub fn display_name(code: &str) -> String {
    lookup(code)
        .map(|entry| entry.name.to_string())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(LANGUAGES.len(), 24);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = LANGUAGES.iter().map(|entry| entry.code).collect();
        assert_eq!(codes.len(), LANGUAGES.len());
    }

    #[test]
    fn test_lookup_known_code() {
        let entry = lookup("es").expect("Spanish should be in the catalog");
        assert_eq!(entry.name, "Spanish");
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert!(lookup("xx").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_code() {
        assert_eq!(display_name("ja"), "Japanese");
        assert_eq!(display_name("xx"), "xx");
    }
}
