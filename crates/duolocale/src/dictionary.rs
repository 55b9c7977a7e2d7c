use std::collections::HashMap;

use thiserror::Error;

use crate::locale::Locale;

#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The input was not a flat JSON object of strings.
    #[error("Failed to parse dictionary JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An immutable key to display-text table for one locale.
///
/// Lookups that miss mean the key has no translation in this locale; the
/// caller leaves the element's current text in place.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Builds a dictionary from key/text pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }

    /// Parses a dictionary from a flat JSON object of strings.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Looks up the display text for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of keys in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The dictionaries for both supported locales.
///
/// Loaded once at startup and never mutated afterwards. The two
/// dictionaries do not have to cover the same keys.
#[derive(Clone, Debug, Default)]
pub struct Translations {
    es: Dictionary,
    en: Dictionary,
}

impl Translations {
    pub fn new(es: Dictionary, en: Dictionary) -> Self {
        Self { es, en }
    }

    /// Parses both dictionaries from flat JSON objects.
    pub fn from_json(es: &str, en: &str) -> Result<Self, DictionaryError> {
        Ok(Self {
            es: Dictionary::from_json_str(es)?,
            en: Dictionary::from_json_str(en)?,
        })
    }

    /// Returns the dictionary for `locale`.
    pub fn for_locale(&self, locale: Locale) -> &Dictionary {
        match locale {
            Locale::Es => &self.es,
            Locale::En => &self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_looks_up_known_keys() {
        let dictionary = Dictionary::from_pairs([("nav.inicio", "Inicio")]);

        assert_eq!(dictionary.get("nav.inicio"), Some("Inicio"));
        assert_eq!(dictionary.get("nav.contacto"), None);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn from_json_str_parses_a_flat_object() {
        let dictionary =
            Dictionary::from_json_str(r#"{"nav.inicio": "Home", "hero.saludo": "Hello"}"#)
                .unwrap();

        assert_eq!(dictionary.get("nav.inicio"), Some("Home"));
        assert_eq!(dictionary.get("hero.saludo"), Some("Hello"));
    }

    #[test]
    fn from_json_str_accepts_an_empty_object() {
        let dictionary = Dictionary::from_json_str("{}").unwrap();

        assert!(dictionary.is_empty());
    }

    #[test]
    fn from_json_str_rejects_non_string_values() {
        let result = Dictionary::from_json_str(r#"{"nav.inicio": 3}"#);

        assert!(matches!(result, Err(DictionaryError::Parse(_))));
    }

    #[test]
    fn from_json_str_rejects_non_objects() {
        let result = Dictionary::from_json_str(r#"["nav.inicio"]"#);

        assert!(matches!(result, Err(DictionaryError::Parse(_))));
    }

    #[test]
    fn for_locale_returns_the_matching_dictionary() {
        let translations = Translations::new(
            Dictionary::from_pairs([("nav.inicio", "Inicio")]),
            Dictionary::from_pairs([("nav.inicio", "Home")]),
        );

        assert_eq!(
            translations.for_locale(Locale::Es).get("nav.inicio"),
            Some("Inicio")
        );
        assert_eq!(
            translations.for_locale(Locale::En).get("nav.inicio"),
            Some("Home")
        );
    }

    #[test]
    fn from_json_covers_both_locales() {
        let translations = Translations::from_json(
            r#"{"nav.inicio": "Inicio"}"#,
            r#"{"nav.inicio": "Home"}"#,
        )
        .unwrap();

        assert_eq!(
            translations.for_locale(Locale::Es).get("nav.inicio"),
            Some("Inicio")
        );
        assert_eq!(
            translations.for_locale(Locale::En).get("nav.inicio"),
            Some("Home")
        );
    }
}
