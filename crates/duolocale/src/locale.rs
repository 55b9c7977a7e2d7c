use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, langid};

/// Error returned when parsing a string that is not one of the two
/// supported locale tags.
#[derive(Debug, Error)]
#[error("Unsupported locale tag '{0}'")]
pub struct ParseLocaleError(String);

/// The two locales this crate can present.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, EnumIter, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish, tag `es`.
    Es,
    /// English, tag `en`. The default when neither a stored preference nor
    /// the environment language selects Spanish.
    #[default]
    En,
}

impl Locale {
    /// Returns the BCP 47 tag for this locale.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Returns the locale's name in its own language.
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::Es => "Español",
            Locale::En => "English",
        }
    }

    /// Returns the other supported locale.
    pub fn other(self) -> Self {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }

    /// Parses a tag that must be exactly `"es"` or `"en"`.
    ///
    /// Stored preferences go through this: anything else in the store is
    /// treated as absent rather than guessed at.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Matches an environment language hint such as `"es-MX"` or
    /// `"es_ES.UTF-8"` against the supported locales.
    ///
    /// The hint selects whichever locale shares its primary language
    /// subtag, so regional variants map to their base language while
    /// unrelated languages (and lookalikes such as `"est"`) match nothing.
    pub fn from_language_hint(hint: &str) -> Option<Self> {
        use strum::IntoEnumIterator as _;

        let hinted = normalize_language_hint(hint)
            .parse::<LanguageIdentifier>()
            .ok()?;
        Self::iter().find(|locale| LanguageIdentifier::from(*locale).language == hinted.language)
    }
}

impl From<Locale> for LanguageIdentifier {
    fn from(val: Locale) -> Self {
        match val {
            Locale::Es => langid!("es"),
            Locale::En => langid!("en"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ParseLocaleError(s.to_owned()))
    }
}

/// Reduces a raw environment value to something `unic-langid` can parse.
///
/// POSIX locales carry encoding and modifier suffixes (`es_ES.UTF-8`,
/// `es_ES@euro`) and Android reports underscores instead of hyphens.
fn normalize_language_hint(raw: &str) -> String {
    let raw = raw.trim();
    let base = raw.split(['.', '@']).next().unwrap_or(raw);
    base.replace('_', "-")
}
