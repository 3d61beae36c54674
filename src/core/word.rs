//! Bilingual words and the display/matching language.
//!
//! A `Word` carries one precomputed text per supported language. The wire
//! format uses the locale tags `en-CA` and `fr-CA`, matching what word
//! services return:
//!
//! ```
//! use word_match::core::{Language, Word};
//!
//! let word: Word = serde_json::from_str(r#"{"en-CA": "cat", "fr-CA": "chat"}"#).unwrap();
//! assert_eq!(word.text(Language::English), "cat");
//! assert_eq!(word.text(Language::French), "chat");
//! ```

use serde::{Deserialize, Serialize};

/// Language used to display and match words.
///
/// Shared by every game in a store; switching it is not an undoable action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// The locale tag of the word field this language selects.
    #[must_use]
    pub const fn locale(self) -> &'static str {
        match self {
            Language::English => "en-CA",
            Language::French => "fr-CA",
        }
    }

    /// The other supported language.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Language::English => Language::French,
            Language::French => Language::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => f.write_str("English"),
            Language::French => f.write_str("Français"),
        }
    }
}

/// An immutable pair of localized strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    #[serde(rename = "en-CA")]
    english: String,

    #[serde(rename = "fr-CA")]
    french: String,
}

impl Word {
    /// Create a word from its English and French texts.
    pub fn new(english: impl Into<String>, french: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            french: french.into(),
        }
    }

    /// Text shown (and matched) for the given language.
    #[must_use]
    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::French => &self.french,
        }
    }

    /// Case-insensitive comparison of `input` against the text for `language`.
    #[must_use]
    pub fn matches(&self, input: &str, language: Language) -> bool {
        self.text(language).to_lowercase() == input.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_by_language() {
        let word = Word::new("dog", "chien");
        assert_eq!(word.text(Language::English), "dog");
        assert_eq!(word.text(Language::French), "chien");
    }

    #[test]
    fn test_matches_ignores_case() {
        let word = Word::new("Cat", "Chat");
        assert!(word.matches("cAT", Language::English));
        assert!(word.matches("CHAT", Language::French));
        assert!(!word.matches("chat", Language::English));
        assert!(!word.matches("ca", Language::English));
    }

    #[test]
    fn test_matches_non_ascii() {
        let word = Word::new("tree", "ARBRE ÉTÉ");
        assert!(word.matches("arbre été", Language::French));
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::French).unwrap(), "\"french\"");
        let parsed: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(parsed, Language::English);
    }

    #[test]
    fn test_language_other() {
        assert_eq!(Language::English.other(), Language::French);
        assert_eq!(Language::French.other(), Language::English);
        assert_eq!(Language::French.locale(), "fr-CA");
    }

    #[test]
    fn test_word_wire_format() {
        let word = Word::new("fox", "renard");
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, r#"{"en-CA":"fox","fr-CA":"renard"}"#);
    }
}
