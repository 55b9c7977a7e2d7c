#![doc = include_str!("../README.md")]

pub use unic_langid::{LanguageIdentifier, langid};

mod applier;
mod dictionary;
mod environment;
mod locale;
mod resolve;
pub mod singleton;
mod store;
mod view;

pub use applier::LocaleApplier;
pub use dictionary::{Dictionary, DictionaryError, Translations};
pub use environment::{EnvironmentLanguage, FixedLanguage};
pub use locale::{Locale, ParseLocaleError};
pub use resolve::resolve_locale;
pub use store::{InMemoryStore, PreferenceStore, StoreError};
pub use view::{InMemoryPage, TranslatableView};
