use tracing::warn;

use crate::dictionary::Translations;
use crate::environment::{EnvironmentLanguage, FixedLanguage};
use crate::locale::Locale;
use crate::resolve::resolve_locale;
use crate::store::PreferenceStore;
use crate::view::TranslatableView;

/// Applies one of the two locales to a host view and remembers the choice.
///
/// Construction is explicit: the host hands over its dictionaries, its
/// view, its preference store and, optionally, its environment language
/// signal.
///
/// # Examples
///
/// ```
/// use duolocale::{
///     Dictionary, FixedLanguage, InMemoryPage, InMemoryStore, Locale, LocaleApplier,
///     Translations,
/// };
///
/// let page = InMemoryPage::new();
/// page.push_tagged("nav.inicio", "...");
///
/// let mut applier = LocaleApplier::builder()
///     .translations(Translations::new(
///         Dictionary::from_pairs([("nav.inicio", "Inicio")]),
///         Dictionary::from_pairs([("nav.inicio", "Home")]),
///     ))
///     .view(Box::new(page.clone()))
///     .preferences(Box::new(InMemoryStore::new()))
///     .environment(Box::new(FixedLanguage::new("es-MX")))
///     .build();
///
/// let locale = applier.effective_locale();
/// assert_eq!(locale, Locale::Es);
///
/// applier.apply(locale);
/// assert_eq!(page.text_of("nav.inicio").as_deref(), Some("Inicio"));
/// ```
#[derive(bon::Builder)]
pub struct LocaleApplier {
    /// The dictionaries for both locales.
    translations: Translations,

    /// The view whose tagged elements get rewritten.
    view: Box<dyn TranslatableView>,

    /// Where the chosen locale is persisted.
    preferences: Box<dyn PreferenceStore>,

    /// The environment language signal. Defaults to no signal.
    #[builder(default = Box::new(FixedLanguage::none()))]
    environment: Box<dyn EnvironmentLanguage>,
}

impl LocaleApplier {
    /// Resolves which locale to present: the stored preference when it is
    /// exactly one of the two supported tags, else the environment
    /// language, else [`Locale::En`].
    pub fn effective_locale(&self) -> Locale {
        resolve_locale(
            self.preferences.load().as_deref(),
            self.environment.preferred_language().as_deref(),
        )
    }

    /// Rewrites every tagged element from `locale`'s dictionary, records
    /// the language tag on the view and persists the choice.
    ///
    /// Keys the dictionary does not cover keep their current text.
    /// Applying the same locale twice leaves the view unchanged.
    pub fn apply(&mut self, locale: Locale) {
        let dictionary = self.translations.for_locale(locale);
        self.view
            .apply_translations(&mut |key| dictionary.get(key).map(str::to_owned));
        self.view.set_language_tag(locale.as_str());

        if let Err(e) = self.preferences.store(locale.as_str()) {
            warn!("Failed to persist locale preference '{}': {}", locale, e);
        }
    }

    /// Switches to the locale other than [`Self::effective_locale`],
    /// applies it and returns it.
    pub fn toggle(&mut self) -> Locale {
        let next = self.effective_locale().other();
        self.apply(next);
        next
    }
}
