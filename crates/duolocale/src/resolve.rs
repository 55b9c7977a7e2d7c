use crate::locale::Locale;

/// Resolves which locale to present.
///
/// A stored preference wins when it is exactly one of the two supported
/// tags. Otherwise the environment language hint selects whichever locale
/// shares its primary language subtag. Anything else resolves to
/// [`Locale::En`].
pub fn resolve_locale(stored: Option<&str>, hint: Option<&str>) -> Locale {
    stored
        .and_then(Locale::from_tag)
        .or_else(|| hint.and_then(Locale::from_language_hint))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("es"), None, Locale::Es)]
    #[case(Some("en"), Some("es-MX"), Locale::En)]
    #[case(None, Some("es-MX"), Locale::Es)]
    #[case(None, Some("es_MX.UTF-8"), Locale::Es)]
    #[case(None, Some("fr-FR"), Locale::En)]
    #[case(None, None, Locale::En)]
    fn resolves_in_precedence_order(
        #[case] stored: Option<&str>,
        #[case] hint: Option<&str>,
        #[case] expected: Locale,
    ) {
        assert_eq!(resolve_locale(stored, hint), expected);
    }

    #[rstest]
    #[case(Some("es-MX"))]
    #[case(Some("ES"))]
    #[case(Some("es "))]
    #[case(Some(""))]
    fn corrupt_stored_values_fall_through_to_the_hint(#[case] stored: Option<&str>) {
        assert_eq!(resolve_locale(stored, Some("es-AR")), Locale::Es);
        assert_eq!(resolve_locale(stored, Some("de-DE")), Locale::En);
        assert_eq!(resolve_locale(stored, None), Locale::En);
    }

    #[test]
    fn stored_preference_beats_a_conflicting_hint() {
        assert_eq!(resolve_locale(Some("es"), Some("en-US")), Locale::Es);
        assert_eq!(resolve_locale(Some("en"), Some("es")), Locale::En);
    }
}
