use duolocale::EnvironmentLanguage;
use tracing::debug;

const LOCALE_ENV_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// An [`EnvironmentLanguage`] that asks the operating system.
///
/// Checks the POSIX locale variables in precedence order (`LANGUAGE`,
/// `LC_ALL`, `LC_MESSAGES`, `LANG`) and falls back to the platform locale
/// API when none is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLanguage;

impl SystemLanguage {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentLanguage for SystemLanguage {
    fn preferred_language(&self) -> Option<String> {
        for var in LOCALE_ENV_VARS {
            if let Ok(value) = std::env::var(var)
                && !value.is_empty()
            {
                // LANGUAGE may hold a colon separated priority list.
                let first = value.split(':').next().unwrap_or(&value);
                debug!("Environment language from {}: {}", var, first);
                return Some(first.to_owned());
            }
        }
        sys_locale::get_locale()
    }
}
