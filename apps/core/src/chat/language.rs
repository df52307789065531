//! Language detection for chat queries.
//!
//! A presence test, not statistical detection: any code point inside the
//! Sinhala block (U+0D80 to U+0DFF) classifies the whole string as Sinhala,
//! otherwise English. A single embedded Sinhala character reclassifies the
//! entire input.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Supported response languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Sinhala,
}

impl Language {
    /// Name used in the response table's `Language` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Sinhala => "Sinhala",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Compiled once at first use
static SINHALA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{0D80}-\u{0DFF}]").expect("Invalid regex: Sinhala block"));

/// Detect the language of a query. Always returns a value.
pub fn detect(text: &str) -> Language {
    if SINHALA_PATTERN.is_match(text) {
        Language::Sinhala
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinhala_detection() {
        assert_eq!(detect("මට අධි රුධිර පීඩනය පාලනය කරන්න උපදෙස් දෙන්න."), Language::Sinhala);
        assert_eq!(detect("සුභ උදෑසනක්"), Language::Sinhala);
    }

    #[test]
    fn test_english_detection() {
        assert_eq!(detect("How can I control my blood sugar naturally?"), Language::English);
        assert_eq!(detect("hello"), Language::English);
    }

    #[test]
    fn test_single_sinhala_character_reclassifies() {
        assert_eq!(detect("hello ම world"), Language::Sinhala);
    }

    #[test]
    fn test_empty_and_neutral_text_default_to_english() {
        assert_eq!(detect(""), Language::English);
        assert_eq!(detect("12345 !?"), Language::English);
    }

    #[test]
    fn test_display_matches_table_column() {
        assert_eq!(Language::English.to_string(), "English");
        assert_eq!(Language::Sinhala.to_string(), "Sinhala");
    }
}
