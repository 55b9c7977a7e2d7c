/// The language the hosting environment reports for the user.
///
/// Consulted only when no stored preference selects a locale. Values are
/// raw, e.g. `"es-MX"` from a browser or `"es_ES.UTF-8"` from a POSIX
/// environment; normalization happens during resolution.
pub trait EnvironmentLanguage: Send + Sync {
    /// Returns the environment's preferred language, if it reports one.
    fn preferred_language(&self) -> Option<String>;
}

/// An [`EnvironmentLanguage`] that always reports the same value.
///
/// Useful for hosts that already know the environment string, and for
/// tests.
#[derive(Clone, Debug, Default)]
pub struct FixedLanguage {
    value: Option<String>,
}

impl FixedLanguage {
    /// Reports `value` as the environment language.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// Reports no environment language.
    pub fn none() -> Self {
        Self::default()
    }
}

impl EnvironmentLanguage for FixedLanguage {
    fn preferred_language(&self) -> Option<String> {
        self.value.clone()
    }
}
